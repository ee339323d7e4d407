//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single field-level validation failure.
///
/// `index` identifies the offending record when a whole batch is validated at once
/// (bulk catalog loads); it is `None` for single-value checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}{field} {constraint}", batch_prefix(.index))]
pub struct ValidationError {
    pub index: Option<usize>,
    pub field: &'static str,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        Self {
            index: None,
            field,
            constraint: constraint.into(),
        }
    }

    /// Attach the position of the offending record within a batch.
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

fn batch_prefix(index: &Option<usize>) -> String {
    index.map(|i| format!("product #{i}: ")).unwrap_or_default()
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Infrastructure
/// concerns (file access, parsing) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(field: &'static str, constraint: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(field, constraint))
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// The validation details, if this is a validation failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DomainError::Validation(v) => Some(v),
            _ => None,
        }
    }
}
