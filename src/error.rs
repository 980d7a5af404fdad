//! Error type for fallible browser-facing operations.
//!
//! None of these reach the visitor. They are logged where they surface and
//! the page carries on with whatever state it already has.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// `localStorage` is missing or access to it was denied.
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// A storage read or write was rejected (quota, privacy mode).
    #[error("storage {op} failed for key {key}: {detail}")]
    Storage { op: &'static str, key: String, detail: String },

    /// A DOM call threw.
    #[error("dom operation {op} failed: {detail}")]
    Dom { op: &'static str, detail: String },

    /// The embedded site configuration could not be parsed.
    #[error("site config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    /// Service worker registration was rejected.
    #[error("service worker registration failed: {0}")]
    ServiceWorker(String),
}
