//! Native capabilities for the available-fonts browser.
//!
//! Fonts are found by scanning the platform font directories and reading each
//! face's `name` table. The clipboard is reached through the terminal.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod names;
pub mod scan;

pub use clipboard::Osc52Clipboard;
pub use config::default_font_dirs;
pub use error::{Result, ScanError};
pub use names::read_records;
pub use scan::{DirectoryPermissions, LocalFontSource};
