//! Form-control state holders backing the settings pages.
//!
//! # Design
//! - Each control models the code-behind view of one bound XAML control:
//!   the value the operator sees and edits, detached from the settings
//!   document until collect runs.
//! - Numeric and time controls keep raw text; parsing happens at collect
//!   time and a failed parse leaves the previous document value in place.

use chrono::NaiveTime;

/// Two-state toggle control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleField {
    on: bool,
}

impl ToggleField {
    /// Render a value into the control.
    pub const fn set(&mut self, on: bool) {
        self.on = on;
    }

    /// Current control state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }
}

/// Free-text control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
}

impl TextField {
    /// Render a value into the control.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current control text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Numeric entry control backed by raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberField {
    text: String,
}

impl NumberField {
    /// Render an integer value into the control.
    pub fn set_i64(&mut self, value: i64) {
        self.text = value.to_string();
    }

    /// Render an integer value into the control.
    pub fn set_i32(&mut self, value: i32) {
        self.text = value.to_string();
    }

    /// Render a decimal value into the control.
    pub fn set_f64(&mut self, value: f64) {
        self.text = value.to_string();
    }

    /// Replace the raw text, as a user edit would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the text as an integer; malformed input yields `None`.
    #[must_use]
    pub fn parse_i64(&self) -> Option<i64> {
        self.text.trim().parse().ok()
    }

    /// Parse the text as a 32-bit integer; malformed or out-of-range input
    /// yields `None`.
    #[must_use]
    pub fn parse_i32(&self) -> Option<i32> {
        self.parse_i64().and_then(|value| i32::try_from(value).ok())
    }

    /// Parse the text as a decimal; malformed input yields `None`.
    #[must_use]
    pub fn parse_f64(&self) -> Option<f64> {
        self.text.trim().parse().ok()
    }
}

/// Time-of-day entry control backed by `HH:MM` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeField {
    text: String,
}

impl TimeField {
    /// Render a time value into the control.
    pub fn set_time(&mut self, value: NaiveTime) {
        self.text = value.format("%H:%M").to_string();
    }

    /// Replace the raw text, as a user edit would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the text as `HH:MM`; malformed input yields `None`.
    #[must_use]
    pub fn parse(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.text.trim(), "%H:%M").ok()
    }
}
