//! Raw form input held between keystrokes and submission.
//!
//! `InputState` keeps the fields of both modes at all times. Switching mode
//! only changes which fields the payload builder reads, so text typed in the
//! inactive mode is still there when the user toggles back.

use thiserror::Error;

/// Default number of recommendations requested
pub const DEFAULT_RESULT_COUNT: i64 = 5;

/// Errors raised while coercing raw input text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Result count text is not an integer
    #[error("Invalid result count: {0:?}")]
    InvalidResultCount(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, InputError>;

/// Which recommendation strategy a submission uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Free-text tags plus an optional city filter
    #[default]
    TagBased,
    /// Lookup by user identifier
    UserBased,
}

/// Values entered by the user, prior to submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    mode: Mode,
    tags_text: String,
    city_name: String,
    user_id: String,
    result_count: i64,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            tags_text: String::new(),
            city_name: String::new(),
            user_id: String::new(),
            result_count: DEFAULT_RESULT_COUNT,
        }
    }

    // Getters

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tags_text(&self) -> &str {
        &self.tags_text
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn result_count(&self) -> i64 {
        self.result_count
    }

    // Mutators - one per input event

    /// Switch mode. Fields of the other mode are left untouched.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_tags_text(&mut self, text: impl Into<String>) {
        self.tags_text = text.into();
    }

    /// Set the city filter; an empty string means "no city selected"
    pub fn set_city_name(&mut self, city: impl Into<String>) {
        self.city_name = city.into();
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = user_id.into();
    }

    /// Set the result count. No bound is enforced here; `1` is only a hint
    /// given to whatever collects the value.
    pub fn set_result_count(&mut self, count: i64) {
        self.result_count = count;
    }

    /// Coerce raw result count text the way a numeric form field does.
    ///
    /// Blank text coerces to 0. Anything else must parse as an integer,
    /// otherwise the previous count is kept and an error is returned.
    pub fn set_result_count_text(&mut self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        let count = if trimmed.is_empty() {
            0
        } else {
            trimmed
                .parse::<i64>()
                .map_err(|_| InputError::InvalidResultCount(text.to_string()))?
        };
        self.result_count = count;
        Ok(())
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = InputState::new();
        assert_eq!(input.mode(), Mode::TagBased);
        assert_eq!(input.result_count(), 5);
        assert!(input.tags_text().is_empty());
        assert!(input.city_name().is_empty());
        assert!(input.user_id().is_empty());
    }

    #[test]
    fn test_mode_toggle_preserves_inactive_fields() {
        let mut input = InputState::new();
        input.set_tags_text("thai, vegan");
        input.set_city_name("Mesa");

        input.select_mode(Mode::UserBased);
        input.set_user_id("42");
        input.select_mode(Mode::TagBased);

        assert_eq!(input.tags_text(), "thai, vegan");
        assert_eq!(input.city_name(), "Mesa");
        assert_eq!(input.user_id(), "42");
    }

    #[test]
    fn test_result_count_text_coercion() {
        let mut input = InputState::new();

        input.set_result_count_text(" 12 ").unwrap();
        assert_eq!(input.result_count(), 12);

        input.set_result_count_text("").unwrap();
        assert_eq!(input.result_count(), 0);

        input.set_result_count_text("-3").unwrap();
        assert_eq!(input.result_count(), -3);
    }

    #[test]
    fn test_invalid_result_count_keeps_previous_value() {
        let mut input = InputState::new();
        input.set_result_count(8);

        let err = input.set_result_count_text("ten").unwrap_err();
        assert_eq!(err, InputError::InvalidResultCount("ten".to_string()));
        assert_eq!(input.result_count(), 8);
    }
}
