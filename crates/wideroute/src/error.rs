use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use wideroute_config::ConfigError;
use wideroute_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use wideroute_schema::{ddl::DdlError, select::SelectError};

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{origin}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::Invalid => ErrorKind::Input(InputErrorKind::InvalidSchema),
            ErrorClass::Unsupported => ErrorKind::Unsupported,
            ErrorClass::InvariantViolation if err.catalog_error().is_some() => {
                ErrorKind::IdentifierCollision
            }
            ErrorClass::InvariantViolation => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<DdlError> for Error {
    fn from(err: DdlError) -> Self {
        Self::new(
            ErrorKind::Input(InputErrorKind::Ddl),
            ErrorOrigin::Ddl,
            err.to_string(),
        )
    }
}

impl From<SelectError> for Error {
    fn from(err: SelectError) -> Self {
        let kind = match err {
            SelectError::NotFound(_) => InputErrorKind::TableNotFound,
            SelectError::Empty | SelectError::BadEntry(_) => InputErrorKind::TableList,
        };

        Self::new(ErrorKind::Input(kind), ErrorOrigin::Selection, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Input(InputErrorKind),

    /// The schema is valid but exceeds what enumeration supports.
    Unsupported,

    /// Two patterns derived the same method id or route template.
    IdentifierCollision,

    Config,

    /// The caller cannot remediate this.
    Internal,
}

///
/// InputErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum InputErrorKind {
    /// DDL text could not be parsed.
    Ddl,

    /// A table schema failed structural validation.
    InvalidSchema,

    /// A table selection list was malformed.
    TableList,

    /// A selected table is absent from the input.
    TableNotFound,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Catalog,
    Config,
    Ddl,
    Enumerator,
    Naming,
    Schema,
    Selection,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Schema => Self::Schema,
            CoreErrorOrigin::Naming => Self::Naming,
            CoreErrorOrigin::Catalog => Self::Catalog,
            CoreErrorOrigin::Enumerator => Self::Enumerator,
        }
    }
}
