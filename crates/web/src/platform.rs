//! Browser capabilities.
//!
//! `queryLocalFonts` and the Permissions/Clipboard APIs are looked up by name
//! at call time, so a browser lacking any of them degrades instead of failing
//! to load.

use availablefonts_core::{
    Clipboard, FontRecord, FontSource, PermissionQuery, PermissionState, SourceError,
    error::Result,
};
use js_sys::{Array, Function, Object, Promise, Reflect};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `window.queryLocalFonts()`, available in Chrome 103+ and Edge 103+.
pub struct BrowserFonts;

/// `navigator.permissions.query()`.
pub struct BrowserPermissions;

/// `navigator.clipboard.writeText()`.
pub struct BrowserClipboard;

fn property(target: &JsValue, name: &str) -> std::result::Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    property(target, name).ok()?.dyn_into::<Function>().ok()
}

fn string_property(target: &JsValue, name: &str) -> String {
    property(target, name).ok().and_then(|value| value.as_string()).unwrap_or_default()
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Convert one `FontData` object.
fn font_record(data: &JsValue) -> FontRecord {
    FontRecord {
        family: string_property(data, "family"),
        full_name: string_property(data, "fullName"),
        postscript_name: string_property(data, "postscriptName"),
        style: string_property(data, "style"),
    }
}

/// Call `queryLocalFonts` on `target`, normally the window.
async fn query_local_fonts_on(target: &JsValue) -> Result<Vec<FontRecord>> {
    let query = method(target, "queryLocalFonts").ok_or(SourceError::Unsupported)?;

    let promise = query
        .call0(target)
        .and_then(|value| value.dyn_into::<Promise>())
        .map_err(|e| SourceError::Failed(describe(&e)))?;
    let fonts = JsFuture::from(promise).await.map_err(|e| SourceError::Failed(describe(&e)))?;

    let fonts: Vec<FontRecord> =
        Array::from(&fonts).iter().map(|data| font_record(&data)).collect();
    debug!("queryLocalFonts returned {} fonts", fonts.len());
    Ok(fonts)
}

/// Query `name` on a `Permissions` object. `None` if the query cannot be made.
async fn query_permission_on(permissions: &JsValue, name: &str) -> Option<PermissionState> {
    let query = method(permissions, "query")?;

    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("name"), &JsValue::from_str(name)).ok()?;

    let promise = query.call1(permissions, &descriptor).ok()?.dyn_into::<Promise>().ok()?;
    let status = match JsFuture::from(promise).await {
        Ok(status) => status,
        Err(e) => {
            debug!("permissions.query failed: {}", describe(&e));
            return None;
        }
    };
    PermissionState::parse(&string_property(&status, "state"))
}

impl FontSource for BrowserFonts {
    async fn query_local_fonts(&self) -> Result<Vec<FontRecord>> {
        let window: JsValue = web_sys::window().ok_or(SourceError::Unsupported)?.into();
        query_local_fonts_on(&window).await
    }
}

impl PermissionQuery for BrowserPermissions {
    async fn query(&self, name: &str) -> Option<PermissionState> {
        let navigator: JsValue = web_sys::window()?.navigator().into();
        let permissions = property(&navigator, "permissions").ok()?;
        query_permission_on(&permissions, name).await
    }
}

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator: JsValue = window.navigator().into();
        let written = property(&navigator, "clipboard").and_then(|clipboard| {
            let write = method(&clipboard, "writeText").ok_or(JsValue::UNDEFINED)?;
            write.call1(&clipboard, &JsValue::from_str(text))
        });
        if let Err(e) = written {
            debug!("clipboard.writeText failed: {}", describe(&e));
        }
    }
}
