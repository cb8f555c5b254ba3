//! Core of the available-fonts browser.
//!
//! Holds the session state machine, the capability traits that front ends
//! implement for their platform, the fetch driver and the view model. Nothing
//! here performs I/O on its own.

pub mod browser;
pub mod capability;
pub mod config;
pub mod error;
pub mod record;
pub mod state;
pub mod view;

pub use browser::{FontBrowser, resolve_fetch};
pub use capability::{Clipboard, FontSource, PermissionQuery, PermissionState};
pub use error::{BrowseError, SourceError};
pub use record::FontRecord;
pub use state::{BrowseState, Catalog, Event, Session};
pub use view::{FontItem, Screen};
