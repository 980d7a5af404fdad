//! Motion math for the decorative effects: stat counters, parallax layers and
//! floating leaves. Values are computed here and applied as inline styles by
//! the browser layer.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Frames a stat counter takes to climb from zero to its target.
pub const COUNTER_FRAMES: u32 = 200;

/// Parallax speed used when a layer has no usable `data-speed`.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

// =============================================================================
// COUNTERS
// =============================================================================

/// One rendered step of a counter animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames should be requested.
    pub finished: bool,
}

/// Linear count-up from zero to `target` in roughly `frames` steps.
#[derive(Clone, Debug)]
pub struct CounterRun {
    target: u64,
    step: f64,
    count: f64,
    plus_suffix: bool,
}

impl CounterRun {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64, frames: u32, plus_suffix: bool) -> Self {
        let step = target as f64 / f64::from(frames.max(1));
        Self { target, step, count: 0.0, plus_suffix }
    }

    /// Advance one frame. Intermediate frames show the rounded-up count; the
    /// final frame shows the exact target.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self) -> CounterFrame {
        self.count += self.step;
        if self.count < self.target as f64 {
            let shown = self.count.ceil() as u64;
            CounterFrame { text: self.decorate(shown), finished: false }
        } else {
            CounterFrame { text: self.decorate(self.target), finished: true }
        }
    }

    fn decorate(&self, value: u64) -> String {
        let grouped = format_grouped(value);
        if self.plus_suffix { format!("{grouped}+") } else { grouped }
    }
}

/// Parse a counter's `data-target` attribute from its leading run of digits
/// after any whitespace, so `"1500+"` reads as 1500 and `"1,200"` as 1.
/// `None` when no digit leads.
#[must_use]
pub fn parse_counter_target(raw: Option<&str>) -> Option<u64> {
    let text = raw?.trim_start();
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    match text[..end].parse::<u64>() {
        Ok(target) => Some(target),
        Err(_) => None,
    }
}

/// Format with comma thousands separators (`1234567` -> `1,234,567`).
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// PARALLAX
// =============================================================================

/// Parse a layer's `data-speed`, falling back to `default` when missing or not
/// a finite number.
#[must_use]
pub fn parallax_speed(raw: Option<&str>, default: f64) -> f64 {
    match raw.map(|v| v.trim().parse::<f64>()) {
        Some(Ok(speed)) if speed.is_finite() => speed,
        _ => default,
    }
}

/// Vertical transform for a layer at the given scroll position.
#[must_use]
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    // Adding zero folds -0 into 0 so an unscrolled page reads `translateY(0px)`.
    let offset = -(scroll_y * speed) + 0.0;
    format!("translateY({offset}px)")
}

// =============================================================================
// FLOATING LEAVES
// =============================================================================

/// Randomised presentation for one floating leaf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafStyle {
    pub font_size_rem: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl LeafStyle {
    /// Build a style from a source of uniform samples in `[0, 1)`.
    pub fn sample(mut unit: impl FnMut() -> f64) -> Self {
        Self {
            font_size_rem: unit() * 1.5 + 1.0,
            left_pct: unit() * 100.0,
            duration_s: unit() * 10.0 + 15.0,
            delay_s: unit() * 10.0,
            opacity: unit() * 0.5 + 0.3,
        }
    }

    /// Inline `style` attribute value.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; font-size: {:.2}rem; left: {:.2}%; animation: float {:.2}s infinite linear; animation-delay: {:.2}s; opacity: {:.2};",
            self.font_size_rem, self.left_pct, self.duration_s, self.delay_s, self.opacity
        )
    }
}
