//! Free-text review body with an input-time length limit.

use super::error::ReviewFormError;

/// Maximum review length in Unicode scalar values.
pub const MAX_CONTENT_CHARS: usize = 200;

/// Review body text. Length is enforced whenever the text changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewContent {
    text: String,
}

impl ReviewContent {
    /// Creates review content from `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::ContentTooLong`] when `text` exceeds
    /// [`MAX_CONTENT_CHARS`].
    pub fn new(text: &str) -> Result<Self, ReviewFormError> {
        let mut content = Self::default();
        content.replace(text)?;
        Ok(content)
    }

    /// Replaces the text, leaving the old value in place on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::ContentTooLong`] when `text` exceeds
    /// [`MAX_CONTENT_CHARS`].
    pub fn replace(&mut self, text: &str) -> Result<(), ReviewFormError> {
        let attempted = text.chars().count();
        if attempted > MAX_CONTENT_CHARS {
            return Err(ReviewFormError::ContentTooLong {
                attempted,
                max_length: MAX_CONTENT_CHARS,
            });
        }

        text.clone_into(&mut self.text);
        Ok(())
    }

    /// Returns the current text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Returns true when no text has been entered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the character count using Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns remaining characters before the limit.
    #[must_use]
    pub fn remaining_chars(&self) -> usize {
        MAX_CONTENT_CHARS.saturating_sub(self.char_count())
    }
}
