//! Keyboard input model shared by the theme shortcut, the map zones and the
//! mobile menu.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Modifier keys held during a key event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS.
    pub meta: bool,
}

/// A key event as reported by the browser.
///
/// `key` holds the `KeyboardEvent.key` value (e.g. `"D"`, `"Escape"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self { key: key.into(), modifiers }
    }

    /// Ctrl/Cmd + Shift + D.
    #[must_use]
    pub fn is_theme_chord(&self) -> bool {
        (self.modifiers.ctrl || self.modifiers.meta) && self.modifiers.shift && self.key.eq_ignore_ascii_case("d")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }

    /// Enter or Space, the keys that activate a button-like element.
    #[must_use]
    pub fn is_activation(&self) -> bool {
        self.key == "Enter" || self.key == " "
    }
}
