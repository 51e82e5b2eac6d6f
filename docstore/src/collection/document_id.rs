use crate::common::{DEFAULT_ID_LENGTH, PATH_SEPARATOR};
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt::{Debug, Display};

/// Identifier of a document within its collection.
///
/// Identifiers are assigned by the store when a document is created; callers
/// never choose them. Generated ids are random `[A-Za-z0-9]` strings, 20
/// characters long by default, the same shape hosted document stores use for
/// auto ids.
///
/// ```rust
/// use docstore::collection::DocumentId;
///
/// let id = DocumentId::new();
/// assert_eq!(id.as_str().len(), 20);
///
/// let parsed = DocumentId::parse("abc123").unwrap();
/// assert_eq!(parsed.to_string(), "abc123");
/// assert!(DocumentId::parse("users/abc").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentId(String);

impl DocumentId {
    /// Generates a new random id of the default length.
    pub fn new() -> Self {
        Self::generate(DEFAULT_ID_LENGTH)
    }

    /// Generates a new random id of `length` alphanumeric characters.
    pub fn generate(length: usize) -> Self {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length.max(1))
            .map(char::from)
            .collect();
        DocumentId(id)
    }

    /// Validates a caller supplied id.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidOperation` if `value` is empty or contains `/`.
    pub fn parse(value: &str) -> DocStoreResult<Self> {
        if value.trim().is_empty() {
            log::error!("Document id cannot be empty");
            return Err(DocStoreError::new(
                "Document id cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }

        if value.contains(PATH_SEPARATOR) {
            log::error!("Document id {:?} contains a path separator", value);
            return Err(DocStoreError::new(
                &format!("Document id '{}' cannot contain '{}'", value, PATH_SEPARATOR),
                ErrorKind::InvalidOperation,
            ));
        }

        Ok(DocumentId(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl TryFrom<&str> for DocumentId {
    type Error = DocStoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DocumentId::parse(value)
    }
}

impl TryFrom<&String> for DocumentId {
    type Error = DocStoreError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        DocumentId::parse(value)
    }
}

impl TryFrom<&DocumentId> for DocumentId {
    type Error = DocStoreError;

    fn try_from(value: &DocumentId) -> Result<Self, Self::Error> {
        Ok(value.clone())
    }
}
