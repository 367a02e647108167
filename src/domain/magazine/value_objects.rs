// src/domain/magazine/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, char_len};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const MAGAZINE_NAME_MIN_LEN: usize = 2;
pub const MAGAZINE_NAME_MAX_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagazineId(pub Uuid);

impl MagazineId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagazineName(String);

impl MagazineName {
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`] unless the name is 2 to 16
    /// characters long.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = char_len(&value);
        if !(MAGAZINE_NAME_MIN_LEN..=MAGAZINE_NAME_MAX_LEN).contains(&len) {
            return Err(DomainError::value_constraint(
                "name",
                format!(
                    "must be between {MAGAZINE_NAME_MIN_LEN} and {MAGAZINE_NAME_MAX_LEN} characters"
                ),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MagazineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MagazineName> for String {
    fn from(value: MagazineName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagazineCategory(String);

impl MagazineCategory {
    /// # Errors
    ///
    /// Returns [`DomainError::ValueConstraint`] for an empty category.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::value_constraint(
                "category",
                "must be longer than 0 characters",
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MagazineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MagazineCategory> for String {
    fn from(value: MagazineCategory) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds_are_inclusive() {
        assert!(MagazineName::new("ab").is_ok());
        assert!(MagazineName::new("a".repeat(16)).is_ok());
        assert!(MagazineName::new("a").is_err());
        assert!(MagazineName::new("a".repeat(17)).is_err());
    }

    #[test]
    fn name_error_is_a_value_constraint() {
        let err = MagazineName::new("").unwrap_err();
        assert!(matches!(err, DomainError::ValueConstraint { field: "name", .. }));
    }

    #[test]
    fn category_only_rejects_empty() {
        assert!(MagazineCategory::new(" ").is_ok());
        let err = MagazineCategory::new("").unwrap_err();
        assert!(matches!(err, DomainError::ValueConstraint { field: "category", .. }));
    }
}
