use std::ops::RangeInclusive;
use thiserror::Error;

/// Lowest accepted score
pub const SCORE_MIN: i32 = 0;

/// Highest accepted score
pub const SCORE_MAX: i32 = 100;

/// Inclusive range every stored score lies in
pub const SCORE_RANGE: RangeInclusive<i32> = SCORE_MIN..=SCORE_MAX;

/// Raised when a score falls outside `SCORE_MIN..=SCORE_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Marks must be between 0 and 100")]
pub struct ValidationError {
    value: i32,
}

impl ValidationError {
    #[must_use]
    pub fn new(value: i32) -> Self {
        ValidationError { value }
    }

    /// The rejected input
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Check a candidate score against the accepted range
///
/// # Errors
///
/// Returns a `ValidationError` carrying `value` if it is below `SCORE_MIN`
/// or above `SCORE_MAX`.
pub fn validate_score(value: i32) -> Result<i32, ValidationError> {
    if SCORE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(value))
    }
}
