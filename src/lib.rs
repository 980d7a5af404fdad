//! # greenhaven
//!
//! Progressive enhancement for the Green Haven botanical garden website.
//! The pages are static markup; this crate compiles to WebAssembly and adds
//! the interactive layer on top: theme switching, notifications, the garden
//! map, event filters, the events calendar, form validation, and a handful of
//! decorative effects.
//!
//! Everything except [`web`] is browser-agnostic. Components reach the page
//! through the [`dom::Dom`] registry and defer work through
//! [`schedule::Scheduler`], so the same code runs natively under test against
//! an in-memory document and a manual clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | [`site::Site`] state object, `SiteEvent` dispatch and host `Action`s |
//! | [`theme`] | Light/dark theme and the view-sync dispatcher |
//! | [`prefs`] | Durable theme preference over a pluggable store |
//! | [`toast`] | Transient notifier with per-kind channels |
//! | [`panels`] | Map zone inspector, event filter, calendar |
//! | [`forms`] | Membership and newsletter validation |
//! | [`layout`] | Viewport unit and overflow guards |
//! | [`effects`] | Reveal, counters, parallax, leaves, scrolling helpers |
//! | [`nav`] | Offcanvas menu closing and active link marking |
//! | [`input`] | Keyboard chord model |
//! | [`config`] | `SiteConfig` defaults and embedded JSON overrides |
//! | [`schedule`] | Scheduler seam, debouncer, frame gate |
//! | [`dom`] | Element registry trait |
//! | [`error`] | `SiteError` |
//! | `web` | Browser host (`hydrate` feature only) |

pub mod config;
pub mod dom;
pub mod effects;
pub mod error;
pub mod forms;
pub mod input;
pub mod layout;
pub mod nav;
pub mod panels;
pub mod prefs;
pub mod schedule;
pub mod site;
pub mod theme;
pub mod toast;

#[cfg(feature = "hydrate")]
pub mod web;
