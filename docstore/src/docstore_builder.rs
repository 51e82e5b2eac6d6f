use crate::docstore::DocStore;
use crate::docstore_config::DocStoreConfig;
use crate::errors::{DocStoreError, DocStoreResult};
use crate::store::{StoreClient, StoreClientProvider};

/// Builder for opening a [DocStore].
///
/// Configuration errors are captured as they happen and the first one is
/// returned from [DocStoreBuilder::open], so calls can be chained freely.
/// Without an explicit store client the façade runs on an in-memory store.
///
/// ```rust
/// use docstore::docstore::DocStore;
/// use docstore::store::memory::InMemoryStore;
///
/// let store = DocStore::builder()
///     .store(InMemoryStore::default())
///     .id_field("key")
///     .strict_delete(true)
///     .open()
///     .unwrap();
/// assert_eq!(store.config().id_field(), "key");
/// ```
#[derive(Default)]
pub struct DocStoreBuilder {
    error: Option<DocStoreError>,
    config: DocStoreConfig,
}

impl DocStoreBuilder {
    pub fn new() -> Self {
        DocStoreBuilder {
            error: None,
            config: DocStoreConfig::new(),
        }
    }

    /// Uses `provider` as the store client.
    pub fn store<T: StoreClientProvider + 'static>(self, provider: T) -> Self {
        self.store_client(StoreClient::new(provider))
    }

    /// Uses an existing shared store client handle.
    pub fn store_client(mut self, store_client: StoreClient) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_store_client(store_client) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the field the document id is exposed under. Defaults to `id`.
    pub fn id_field(mut self, id_field: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_id_field(id_field) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Makes deleting a nonexistent document fail with `NotFound`.
    pub fn strict_delete(mut self, strict_delete: bool) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_strict_delete(strict_delete) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Opens the store with the collected configuration.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error captured by the builder.
    pub fn open(self) -> DocStoreResult<DocStore> {
        if let Some(error) = self.error {
            return Err(error);
        }

        self.config.initialize()?;
        DocStore::from_config(self.config)
    }
}
