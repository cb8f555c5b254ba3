//! Terminal front end of the available-fonts browser.

pub mod browse;
pub mod cli;
pub mod render;
