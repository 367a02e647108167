use crate::domain::errors::{DomainError, DomainResult, char_len};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const ARTICLE_TITLE_MIN_LEN: usize = 5;
pub const ARTICLE_TITLE_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`] unless the title is 5 to 50
    /// characters long.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = char_len(&value);
        if !(ARTICLE_TITLE_MIN_LEN..=ARTICLE_TITLE_MAX_LEN).contains(&len) {
            return Err(DomainError::value_constraint(
                "title",
                format!(
                    "must be between {ARTICLE_TITLE_MIN_LEN} and {ARTICLE_TITLE_MAX_LEN} characters"
                ),
            ));
        }
        Ok(Self(value))
    }

    /// Uses the `Display` form of any value as the title.
    ///
    /// # Errors
    ///
    /// Fails like [`ArticleTitle::new`] on the rendered text.
    pub fn coerce(value: impl fmt::Display) -> DomainResult<Self> {
        Self::new(value.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(ArticleTitle::new("abcde").is_ok());
        assert!(ArticleTitle::new("a".repeat(50)).is_ok());
        assert!(ArticleTitle::new("abcd").is_err());
        assert!(ArticleTitle::new("a".repeat(51)).is_err());
    }

    #[test]
    fn coerce_uses_display_form() {
        let title = ArticleTitle::coerce(1_234_567).unwrap();
        assert_eq!(title.as_str(), "1234567");
        assert!(ArticleTitle::coerce(42).is_err());
    }
}
