//! Light/dark theme and the surfaces kept in sync with it.
//!
//! The `<html data-theme>` attribute drives all styling. Applying a theme
//! updates that attribute, persists the choice, refreshes every toggle icon
//! (desktop and mobile controls are separate elements), adds transition hints
//! so the switch animates, and announces the change on the theme channel.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::dom::Dom;
use crate::prefs::ThemePreference;
use crate::toast::{Notifier, ToastKind};

/// Clickable toggle controls.
pub const TOGGLE_SELECTOR: &str = "#themeToggle, #mobileThemeToggle";

/// Every icon mirroring the active theme.
pub const ICON_SELECTOR: &str = "#themeIcon, #mobileThemeIcon, [data-theme-icon]";

const ROOT_ATTRIBUTE: &str = "data-theme";

/// Themed surfaces and the transition each one gets.
const TRANSITION_HINTS: &[(&str, &str)] = &[
    ("body", "background-color 0.3s ease, color 0.3s ease"),
    (".glass-card, .card", "background-color 0.3s ease, border-color 0.3s ease"),
    (".form-control, .form-select", "background-color 0.3s ease, color 0.3s ease, border-color 0.3s ease"),
    (".navbar", "background-color 0.3s ease, border-color 0.3s ease"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted / attribute form. Unknown strings are `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }

    /// Text of the notification announcing a switch to this theme.
    #[must_use]
    pub fn notice(self) -> &'static str {
        match self {
            Self::Light => "Light Mode Activated",
            Self::Dark => "Dark Mode Activated",
        }
    }
}

/// View-sync dispatcher for the theme preference.
pub struct ThemeSync<D: Dom> {
    dom: Rc<D>,
    preference: ThemePreference,
    notifier: Rc<Notifier<D>>,
}

impl<D: Dom + 'static> ThemeSync<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, preference: ThemePreference, notifier: Rc<Notifier<D>>) -> Self {
        Self { dom, preference, notifier }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.preference.get()
    }

    /// Reflect the loaded preference on the page. Nothing is persisted or announced.
    pub fn init(&self) {
        let theme = self.preference.get();
        self.set_root_attribute(theme);
        self.sync_icons(theme);
    }

    /// Make `theme` active everywhere in one synchronous pass.
    pub fn apply(&self, theme: Theme) {
        self.set_root_attribute(theme);
        self.preference.set(theme);
        self.sync_icons(theme);
        self.hint_transitions();
        self.notifier.show(theme.notice(), ToastKind::Theme(theme));
        log::debug!("theme set to {}", theme.as_str());
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.preference.get().toggled();
        self.apply(next);
        next
    }

    fn set_root_attribute(&self, theme: Theme) {
        if let Some(root) = self.dom.root() {
            self.dom.set_attribute(&root, ROOT_ATTRIBUTE, theme.as_str());
        }
    }

    fn sync_icons(&self, theme: Theme) {
        for icon in self.dom.query_all(ICON_SELECTOR) {
            self.dom.set_class_name(&icon, theme.icon_class());
        }
    }

    fn hint_transitions(&self) {
        for (selector, transition) in TRANSITION_HINTS {
            for node in self.dom.query_all(selector) {
                self.dom.set_style(&node, "transition", transition);
            }
        }
    }
}
