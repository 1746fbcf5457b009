use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for folio operations.
///
/// Lookups that miss are not errors: they come back as `None` or an empty list.
/// The kinds below cover the few operations that can actually fail, which are
/// ingesting malformed records, configuring the index and (de)serializing records.
///
/// # Examples
///
/// ```rust
/// use folio::errors::{ErrorKind, FolioError, FolioResult};
///
/// fn example() -> FolioResult<()> {
///     Err(FolioError::new("Record title is empty", ErrorKind::MissingRequiredField))
/// }
/// assert!(example().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Generic validation error
    ValidationError,
    /// A required field is missing or empty
    MissingRequiredField,
    /// Invalid field name
    InvalidFieldName,
    /// Error encoding or decoding a record
    EncodingError,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::MissingRequiredField => write!(f, "Missing required field"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom folio error type.
///
/// `FolioError` carries a message, an [ErrorKind] and an optional cause, so that
/// the rebuild layer can wrap the error of the record it rejected.
///
/// # Examples
///
/// ```rust
/// use folio::errors::{ErrorKind, FolioError};
///
/// let cause = FolioError::new("Record title is empty", ErrorKind::MissingRequiredField);
/// let err = FolioError::new_with_cause("Rebuild aborted", ErrorKind::ValidationError, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct FolioError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<FolioError>>,
    backtrace: Backtrace,
}

impl FolioError {
    /// Creates a new `FolioError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        FolioError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `FolioError` that keeps `cause` as the underlying error.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: FolioError) -> Self {
        FolioError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&FolioError> {
        self.cause.as_deref()
    }
}

impl Display for FolioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for FolioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for FolioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(feature = "serde")]
impl serde::de::Error for FolioError {
    fn custom<T: Display>(msg: T) -> Self {
        FolioError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for FolioError {
    fn custom<T: Display>(msg: T) -> Self {
        FolioError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl From<String> for FolioError {
    fn from(msg: String) -> Self {
        FolioError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for FolioError {
    fn from(msg: &str) -> Self {
        FolioError::new(msg, ErrorKind::InternalError)
    }
}
