//! Review submission rules.

use crate::error::CoreError;

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Longest comment accepted, in characters.
pub const MAX_COMMENT_CHARS: usize = 2000;

/// Validate a star rating and comment before anything is written.
pub fn validate_review(rating: i16, comment: &str) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}."
        )));
    }
    if comment.chars().count() > MAX_COMMENT_CHARS {
        return Err(CoreError::Validation(format!(
            "Comment must be at most {MAX_COMMENT_CHARS} characters."
        )));
    }
    Ok(())
}
