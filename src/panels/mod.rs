//! Interaction panels.
//!
//! Each panel owns one region of the page and is driven by discrete
//! handler calls from [`crate::site::Site`]. Panels never look up their
//! controls by global state; everything goes through the [`crate::dom::Dom`]
//! registry they were built with.
//!
//! | Panel | Region |
//! |-------|--------|
//! | [`map::MapInspector`] | `.garden-zone` map areas and `#zoneDetails` |
//! | [`filters::EventFilter`] | `[data-filter]` controls and `.event-item` list |
//! | [`calendar::CalendarPanel`] | `.calendar-days` month grid |

pub mod calendar;
pub mod filters;
pub mod map;

/// Emphasis class shared by panels that reveal new content.
pub const EMPHASIS_CLASS: &str = "fade-in-up";
