//! Error types for option construction and validation.

use derive_builder::UninitializedFieldError;
use strum::{AsRefStr, Display, IntoStaticStr};
use validator::ValidationErrors;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Specialized [`Result`] type for option construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors raised while building request options.
///
/// Every failure in this crate is a caller-side input problem, so there is a
/// single kind today. Transport and chain errors live in other crates and never
/// carry this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, IntoStaticStr)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An option field or combination of fields is structurally invalid.
    InvalidArgument,
}

impl ErrorKind {
    /// HTTP status code the SDK reports for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidArgument => 400,
        }
    }
}

/// A structured error raised at option construction time.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
#[must_use = "errors should be handled appropriately"]
pub struct Error {
    /// The kind of error that occurred.
    kind: ErrorKind,
    /// Human-readable description naming the offending input.
    message: String,
    /// Optional source error.
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error code string, e.g. `InvalidArgument`.
    pub fn code(&self) -> &'static str {
        self.kind.into()
    }

    /// Returns the HTTP status code associated with this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this error indicates invalid caller input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }
}

/// Turns a descriptive message into the canonical invalid-argument error.
///
/// All validation sites in this crate go through this constructor so callers
/// can match on [`ErrorKind::InvalidArgument`] instead of message text.
pub fn to_invalid_argument(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidArgument, message)
}

impl From<UninitializedFieldError> for Error {
    fn from(err: UninitializedFieldError) -> Self {
        to_invalid_argument(format!("missing required field `{}`", err.field_name()))
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        to_invalid_argument(errors.to_string()).with_source(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_shape() {
        let err = to_invalid_argument("Invalid Range : start=-1 end=10");

        assert!(err.is_invalid_argument());
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.code(), "InvalidArgument");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid Range : start=-1 end=10");
        assert_eq!(
            err.to_string(),
            "InvalidArgument: Invalid Range : start=-1 end=10"
        );
    }

    #[test]
    fn uninitialized_field_maps_to_invalid_argument() {
        let err = Error::from(UninitializedFieldError::new("read_price"));

        assert!(err.is_invalid_argument());
        assert!(err.message().contains("read_price"));
    }

    #[test]
    fn validation_errors_keep_source() {
        let mut errors = ValidationErrors::new();
        errors.add("max_keys", validator::ValidationError::new("range"));

        let err = Error::from(errors);

        assert!(err.is_invalid_argument());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.message().contains("max_keys"));
    }
}
