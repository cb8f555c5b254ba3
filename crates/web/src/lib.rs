//! Browser front end of the available-fonts browser.
//!
//! Compiled to wasm, it mounts the page into `<body>` on load. Fonts are only
//! requested once the user presses the fetch button.

pub mod app;
pub mod platform;

use log::{Level, warn};
use wasm_bindgen::prelude::*;

use crate::app::App;

/// Route `log` records to the browser console. Later calls keep the first
/// logger.
fn init_logging() {
    if let Err(e) = console_log::init_with_level(Level::Info) {
        warn!("Console logger already installed: {e}");
    }
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    App::mount(document, &body)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use log::LevelFilter;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        assert_eq!(log::max_level(), LevelFilter::Info);
        log::info!("logging to the console");
    }
}
