use backtrace::Backtrace;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for docstore operations.
///
/// The first four variants are the failure modes a caller of the façade has to
/// handle. The remaining ones report misuse of the local value model.
///
/// # Examples
///
/// ```rust
/// use docstore::errors::{DocStoreError, DocStoreResult, ErrorKind};
///
/// fn example() -> DocStoreResult<()> {
///     Err(DocStoreError::new("users/42 does not exist", ErrorKind::NotFound))
/// }
///
/// assert_eq!(example().unwrap_err().kind(), &ErrorKind::NotFound);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Transport, authentication or network failure, or the store is closed
    StoreUnavailable,
    /// The operation targeted a nonexistent document where existence was required
    NotFound,
    /// Unsupported filter operator or malformed sort options
    InvalidQuery,
    /// Store-side validation or permission failure on create/update/delete
    WriteRejected,
    /// The operation is not valid for the given arguments
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::StoreUnavailable => write!(f, "Store unavailable"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::InvalidQuery => write!(f, "Invalid query"),
            ErrorKind::WriteRejected => write!(f, "Write rejected"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type returned by every fallible docstore call.
///
/// `DocStoreError` carries a message, an [ErrorKind] and an optional cause, so a
/// store client can wrap its own failure in the kind the façade reports.
/// A backtrace is captured when the error is created.
///
/// ```rust
/// use docstore::errors::{DocStoreError, ErrorKind};
///
/// let cause = DocStoreError::new("connection reset", ErrorKind::StoreUnavailable);
/// let err = DocStoreError::new_with_cause("create failed", ErrorKind::StoreUnavailable, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct DocStoreError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<DocStoreError>>,
    backtrace: Backtrace,
}

impl DocStoreError {
    /// Creates a new `DocStoreError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DocStoreError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `DocStoreError` that keeps `cause` in its error chain.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DocStoreError) -> Self {
        DocStoreError {
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

    pub fn cause(&self) -> Option<&DocStoreError> {
        self.cause.as_deref()
    }
}

impl Display for DocStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for DocStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for DocStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for docstore operations.
pub type DocStoreResult<T> = Result<T, DocStoreError>;

impl From<String> for DocStoreError {
    fn from(msg: String) -> Self {
        DocStoreError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for DocStoreError {
    fn from(msg: &str) -> Self {
        DocStoreError::new(msg, ErrorKind::InternalError)
    }
}

// lets strongly typed arguments flow through `TryInto` bounds
impl From<Infallible> for DocStoreError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
