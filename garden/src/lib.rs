//! Static tables and presentation rules for the Green Haven site.
//!
//! This crate is browser agnostic so the WASM layer and native tests can
//! share the same zone copy, calendar layout, validation and motion math.
//!
//! | Module | Role |
//! |--------|------|
//! | [`zones`] | Garden map zone descriptors and detail markup |
//! | [`calendar`] | Month grid layout and activity-day marking |
//! | [`validate`] | Required-field and newsletter email checks |
//! | [`motion`] | Counter stepping, parallax offsets, floating leaf styles |

pub mod calendar;
pub mod motion;
pub mod validate;
pub mod zones;
