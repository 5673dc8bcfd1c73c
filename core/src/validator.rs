//! Minimum-length validation for a single text field.
//!
//! # Design
//! `warning` is derived from the length of the last validated text and
//! nothing else. The validator also remembers the latest text it was told
//! about so `on_blur` can re-check it without the caller passing it again.
//! Lengths count Unicode scalar values, not bytes.

/// Titles of this length or shorter raise the warning.
pub const MIN_TITLE_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct InputValidator {
    threshold: usize,
    warning: bool,
    latest: String,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::with_threshold(MIN_TITLE_LEN)
    }

    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold,
            warning: false,
            latest: String::new(),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn warning(&self) -> bool {
        self.warning
    }

    /// Whether `text` is long enough to pass.
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().count() > self.threshold
    }

    pub fn validate(&mut self, text: &str) {
        self.set_value(text);
        self.warning = !self.accepts(text);
    }

    /// Record the field's current text without validating it.
    pub fn set_value(&mut self, text: &str) {
        if self.latest != text {
            self.latest.clear();
            self.latest.push_str(text);
        }
    }

    pub fn reset(&mut self) {
        self.warning = false;
    }

    /// Re-validate the latest known text regardless of its length.
    pub fn on_blur(&mut self) {
        let latest = std::mem::take(&mut self.latest);
        self.validate(&latest);
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
