use crate::common::{DOC_ID, FIELD_SEPARATOR};
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use crate::store::memory::InMemoryStore;
use crate::store::StoreClient;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Settings of a [DocStore](crate::docstore::DocStore).
///
/// A configuration is mutable until the store is opened; afterwards every
/// setter fails with `InvalidOperation`. Clones share the same settings.
///
/// ```rust
/// use docstore::docstore_config::DocStoreConfig;
///
/// let config = DocStoreConfig::new();
/// assert_eq!(config.id_field(), "id");
/// assert!(!config.strict_delete());
/// ```
#[derive(Clone)]
pub struct DocStoreConfig {
    inner: Arc<DocStoreConfigInner>,
}

impl Default for DocStoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DocStoreConfig {
    pub fn new() -> Self {
        DocStoreConfig {
            inner: Arc::new(DocStoreConfigInner::new()),
        }
    }

    /// Name of the field the document id is exposed under in returned documents.
    pub fn id_field(&self) -> String {
        self.inner.id_field.read().clone()
    }

    /// Sets the id field name.
    ///
    /// # Errors
    ///
    /// Returns error if already configured, or if the name is empty or contains
    /// the field separator.
    pub fn set_id_field(&self, id_field: &str) -> DocStoreResult<()> {
        self.inner.check_not_configured("Id field")?;

        if id_field.is_empty() {
            log::error!("Id field name cannot be empty");
            return Err(DocStoreError::new(
                "Id field name cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }

        if id_field.contains(FIELD_SEPARATOR) {
            log::error!("Id field name '{}' cannot be an embedded field", id_field);
            return Err(DocStoreError::new(
                &format!("Id field name '{}' cannot be an embedded field", id_field),
                ErrorKind::InvalidOperation,
            ));
        }

        *self.inner.id_field.write() = id_field.to_string();
        Ok(())
    }

    /// Whether deleting a nonexistent document fails with `NotFound`.
    pub fn strict_delete(&self) -> bool {
        self.inner.strict_delete.load(Ordering::Relaxed)
    }

    pub fn set_strict_delete(&self, strict_delete: bool) -> DocStoreResult<()> {
        self.inner.check_not_configured("Strict delete")?;
        self.inner.strict_delete.store(strict_delete, Ordering::Relaxed);
        Ok(())
    }

    /// Sets the store client the façade delegates to.
    ///
    /// # Errors
    ///
    /// Returns error if already configured or if a client was set before.
    pub fn set_store_client(&self, store_client: StoreClient) -> DocStoreResult<()> {
        self.inner.check_not_configured("Store client")?;

        if self.inner.store_client.set(store_client).is_err() {
            log::error!("A store client is already configured");
            return Err(DocStoreError::new(
                "A store client is already configured",
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }

    /// Gets the configured store client.
    ///
    /// # Errors
    ///
    /// Returns error if no store client is configured.
    pub fn store_client(&self) -> DocStoreResult<StoreClient> {
        match self.inner.store_client.get() {
            Some(store_client) => Ok(store_client.clone()),
            None => {
                log::error!("No store client is configured");
                Err(DocStoreError::new(
                    "No store client is configured",
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.inner.configured.load(Ordering::Relaxed)
    }

    /// Freezes the configuration, falling back to an in-memory store client
    /// when none was set.
    pub(crate) fn initialize(&self) -> DocStoreResult<()> {
        if self.inner.configured.swap(true, Ordering::Relaxed) {
            log::error!("Configuration is already initialized");
            return Err(DocStoreError::new(
                "Configuration is already initialized",
                ErrorKind::InvalidOperation,
            ));
        }

        self.inner.store_client.get_or_init(|| {
            log::debug!("No store client configured, using an in-memory store");
            StoreClient::new(InMemoryStore::default())
        });
        Ok(())
    }
}

struct DocStoreConfigInner {
    configured: AtomicBool,
    id_field: RwLock<String>,
    strict_delete: AtomicBool,
    store_client: OnceLock<StoreClient>,
}

impl DocStoreConfigInner {
    fn new() -> Self {
        DocStoreConfigInner {
            configured: AtomicBool::from(false),
            id_field: RwLock::new(DOC_ID.to_string()),
            strict_delete: AtomicBool::from(false),
            store_client: OnceLock::new(),
        }
    }

    fn check_not_configured(&self, setting: &str) -> DocStoreResult<()> {
        if self.configured.load(Ordering::Relaxed) {
            log::error!("{} cannot be changed after initialization", setting);
            return Err(DocStoreError::new(
                &format!("{} cannot be changed after initialization", setting),
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }
}
