use crate::{catalog::CatalogError, enumerate::EnumerateError};
use std::fmt;
use thiserror::Error as ThisError;
use wideroute_schema::error::ErrorTree;

///
/// InternalError
///
/// Structured enumeration error with a stable internal classification.
/// Every variant is fatal for the table being processed; the caller decides
/// whether to skip that table or abort the run.
///

#[derive(Debug, ThisError)]
#[error("{origin}:{class}: {message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a naming-origin invariant violation.
    pub(crate) fn naming_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Naming,
            message.into(),
        )
    }

    /// Wrap a rejected table schema.
    pub(crate) fn schema_invalid(errors: ErrorTree) -> Self {
        Self {
            class: ErrorClass::Invalid,
            origin: ErrorOrigin::Schema,
            message: format!("schema validation failed: {errors}"),
            detail: Some(ErrorDetail::Schema(errors)),
        }
    }

    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self.class, ErrorClass::InvariantViolation)
    }

    /// Structured schema failures, when this error came from validation.
    #[must_use]
    pub const fn schema_errors(&self) -> Option<&ErrorTree> {
        match &self.detail {
            Some(ErrorDetail::Schema(errors)) => Some(errors),
            _ => None,
        }
    }

    #[must_use]
    pub const fn catalog_error(&self) -> Option<&CatalogError> {
        match &self.detail {
            Some(ErrorDetail::Catalog(err)) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub const fn enumerate_error(&self) -> Option<&EnumerateError> {
        match &self.detail {
            Some(ErrorDetail::Enumerator(err)) => Some(err),
            _ => None,
        }
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Schema(ErrorTree),

    #[error("{0}")]
    Catalog(CatalogError),

    #[error("{0}")]
    Enumerator(EnumerateError),
}

impl From<CatalogError> for InternalError {
    fn from(err: CatalogError) -> Self {
        Self {
            class: ErrorClass::InvariantViolation,
            origin: ErrorOrigin::Catalog,
            message: err.to_string(),
            detail: Some(ErrorDetail::Catalog(err)),
        }
    }
}

impl From<EnumerateError> for InternalError {
    fn from(err: EnumerateError) -> Self {
        Self {
            class: ErrorClass::Unsupported,
            origin: ErrorOrigin::Enumerator,
            message: err.to_string(),
            detail: Some(ErrorDetail::Enumerator(err)),
        }
    }
}

///
/// ErrorClass
/// Internal error taxonomy for enumeration failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The input schema was rejected before enumeration.
    Invalid,
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Invalid => "invalid",
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Which stage of the pipeline raised the error.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Schema,
    Naming,
    Catalog,
    Enumerator,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Schema => "schema",
            Self::Naming => "naming",
            Self::Catalog => "catalog",
            Self::Enumerator => "enumerator",
        };
        write!(f, "{label}")
    }
}
