// src/domain/author/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How strictly an author's name is checked when the author is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorNamePolicy {
    /// Any string is accepted, including the empty string.
    #[default]
    Permissive,
    /// Names that are empty or whitespace-only are rejected.
    NonEmpty,
}

impl AuthorNamePolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::NonEmpty => "non_empty",
        }
    }
}

impl fmt::Display for AuthorNamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorNamePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "non_empty" | "non-empty" => Ok(Self::NonEmpty),
            other => Err(DomainError::value_constraint(
                "author_name_policy",
                format!("has unknown value '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorName(String);

impl AuthorName {
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`] when `policy` is
    /// [`AuthorNamePolicy::NonEmpty`] and the name is blank.
    pub fn new(value: impl Into<String>, policy: AuthorNamePolicy) -> DomainResult<Self> {
        let value = value.into();
        if policy == AuthorNamePolicy::NonEmpty && value.trim().is_empty() {
            return Err(DomainError::value_constraint("name", "cannot be empty"));
        }
        Ok(Self(value))
    }

    pub(crate) fn unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_policy_accepts_anything() {
        let name = AuthorName::new("", AuthorNamePolicy::Permissive).unwrap();
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn non_empty_policy_rejects_blank_names() {
        let err = AuthorName::new("   ", AuthorNamePolicy::NonEmpty).unwrap_err();
        assert!(matches!(err, DomainError::ValueConstraint { field: "name", .. }));
        assert!(AuthorName::new("Ada", AuthorNamePolicy::NonEmpty).is_ok());
    }

    #[test]
    fn policy_parses_both_spellings() {
        assert_eq!(
            "non-empty".parse::<AuthorNamePolicy>().unwrap(),
            AuthorNamePolicy::NonEmpty
        );
        assert_eq!(
            "Permissive".parse::<AuthorNamePolicy>().unwrap(),
            AuthorNamePolicy::Permissive
        );
        assert!("strict".parse::<AuthorNamePolicy>().is_err());
    }
}
