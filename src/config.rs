//! Site configuration.
//!
//! Every field has a default matching the production site. A page may embed
//! `<script type="application/json" id="site-config">` to override any subset
//! of fields; unknown fields are ignored and a malformed blob falls back to
//! the defaults with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::dom::Dom;
use crate::error::SiteError;

/// Id of the element carrying the JSON override blob.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_ZONE_HIGHLIGHT_MS: u32 = 800;
pub const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const DEFAULT_FLOATING_LEAF_COUNT: u32 = 8;
pub const DEFAULT_SERVICE_WORKER_PATH: &str = "/sw.js";

/// Timings for the transient notifier, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Delay before sliding in. Never zero, so the entry transition is visible.
    pub enter_delay_ms: u32,
    /// Visible time for theme-change notices, measured from insertion.
    pub theme_hold_ms: u32,
    /// Visible time for form-result notices, measured from insertion.
    pub message_hold_ms: u32,
    /// Length of the slide-out transition; removal waits this long.
    pub exit_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self { enter_delay_ms: 100, theme_hold_ms: 2000, message_hold_ms: 3000, exit_ms: 300 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub toast: ToastTimings,
    pub resize_debounce_ms: u32,
    pub zone_highlight_ms: u32,
    pub counter_frames: u32,
    pub parallax_default_speed: f64,
    pub back_to_top_threshold_px: f64,
    pub floating_leaf_count: u32,
    pub service_worker_path: String,
    /// Calendar days flagged as having a scheduled activity.
    pub activity_days: Vec<u32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            toast: ToastTimings::default(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            zone_highlight_ms: DEFAULT_ZONE_HIGHLIGHT_MS,
            counter_frames: garden::motion::COUNTER_FRAMES,
            parallax_default_speed: garden::motion::DEFAULT_PARALLAX_SPEED,
            back_to_top_threshold_px: DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
            floating_leaf_count: DEFAULT_FLOATING_LEAF_COUNT,
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_owned(),
            activity_days: garden::calendar::DEFAULT_ACTIVITY_DAYS.to_vec(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override blob. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let parsed = serde_json::from_str::<Self>(raw)?;
        Ok(parsed.normalized())
    }

    /// Read the override blob from the page, if any.
    pub fn from_document<D: Dom>(dom: &D) -> Self {
        let Some(raw) = dom.by_id(CONFIG_ELEMENT_ID).map(|el| dom.text(&el)) else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring embedded site config: {e}");
                Self::default()
            }
        }
    }

    /// Replace values that would break an invariant with their defaults.
    fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if self.toast.enter_delay_ms == 0 {
            log::warn!("toast enter delay must be non-zero; using {}ms", defaults.toast.enter_delay_ms);
            self.toast.enter_delay_ms = defaults.toast.enter_delay_ms;
        }
        if self.theme_storage_key.trim().is_empty() {
            self.theme_storage_key = defaults.theme_storage_key;
        }
        if !self.parallax_default_speed.is_finite() {
            self.parallax_default_speed = defaults.parallax_default_speed;
        }
        if self.counter_frames == 0 {
            self.counter_frames = defaults.counter_frames;
        }
        self
    }
}
