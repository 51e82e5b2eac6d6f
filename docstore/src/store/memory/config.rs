use crate::common::DEFAULT_ID_LENGTH;
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Configuration for an [InMemoryStore](super::InMemoryStore).
///
/// The configuration is shared: clones point at the same settings, and a
/// store built from it observes later changes. Tests use this to seed a
/// store and then switch it to read-only.
///
/// ```rust
/// use docstore::store::memory::InMemoryStoreConfig;
///
/// let config = InMemoryStoreConfig::new();
/// assert_eq!(config.id_length(), 20);
/// assert!(!config.is_read_only());
/// ```
#[derive(Clone)]
pub struct InMemoryStoreConfig {
    inner: Arc<InMemoryStoreConfigInner>,
}

impl InMemoryStoreConfig {
    pub fn new() -> InMemoryStoreConfig {
        InMemoryStoreConfig {
            inner: Arc::new(InMemoryStoreConfigInner::new()),
        }
    }

    /// Length of the ids generated for new documents.
    pub fn id_length(&self) -> usize {
        self.inner.id_length.load(Ordering::Relaxed)
    }

    /// Sets the length of generated ids.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if `length` is zero.
    pub fn set_id_length(&self, length: usize) -> DocStoreResult<()> {
        if length == 0 {
            log::error!("Generated id length must be greater than zero");
            return Err(DocStoreError::new(
                "Generated id length must be greater than zero",
                ErrorKind::InvalidOperation,
            ));
        }
        self.inner.id_length.store(length, Ordering::Relaxed);
        Ok(())
    }

    /// Whether writes are rejected with `WriteRejected`.
    pub fn is_read_only(&self) -> bool {
        self.inner.read_only.load(Ordering::Relaxed)
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.inner.read_only.store(read_only, Ordering::Relaxed);
    }
}

impl Default for InMemoryStoreConfig {
    fn default() -> Self {
        InMemoryStoreConfig::new()
    }
}

struct InMemoryStoreConfigInner {
    id_length: AtomicUsize,
    read_only: AtomicBool,
}

impl InMemoryStoreConfigInner {
    fn new() -> InMemoryStoreConfigInner {
        InMemoryStoreConfigInner {
            id_length: AtomicUsize::new(DEFAULT_ID_LENGTH),
            read_only: AtomicBool::new(false),
        }
    }
}
