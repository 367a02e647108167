// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("type constraint violated: {field} must be {expected}")]
    TypeConstraint {
        field: &'static str,
        expected: &'static str,
    },
    #[error("value constraint violated: {field} {reason}")]
    ValueConstraint { field: &'static str, reason: String },
    #[error("{field} is an immutable attribute")]
    ImmutableField { field: &'static str },
}

impl DomainError {
    #[must_use]
    pub const fn type_constraint(field: &'static str, expected: &'static str) -> Self {
        Self::TypeConstraint { field, expected }
    }

    #[must_use]
    pub fn value_constraint(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValueConstraint {
            field,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn immutable(field: &'static str) -> Self {
        Self::ImmutableField { field }
    }

    /// Name of the field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::TypeConstraint { field, .. }
            | Self::ValueConstraint { field, .. }
            | Self::ImmutableField { field } => *field,
        }
    }
}

/// Unicode scalar count, the unit every length constraint in the model uses.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
