//! Browser host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded as the page's WASM module. [`start`] installs the panic hook and
//! console logger, then mounts the site once the document has been parsed.
//! The submodules implement the crate's seams over `web-sys`:
//!
//! - [`WebDom`]: the [`crate::dom::Dom`] registry over the live document
//! - [`BrowserScheduler`]: `setTimeout` and `requestAnimationFrame`
//! - [`LocalStorage`]: the preference store
//! - `wire`: event listeners, observers, and host-side [`crate::site::Action`]s

mod dom;
mod schedule;
mod storage;
mod wire;

pub use dom::WebDom;
pub use schedule::BrowserScheduler;
pub use storage::LocalStorage;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {e}");
    }

    if let Err(e) = wire::boot() {
        log::error!("site failed to start: {e}");
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
