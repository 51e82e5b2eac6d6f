use crate::collection::{Document, DocumentId, FindOptions};
use crate::errors::DocStoreResult;
use crate::filter::Filter;
use std::ops::Deref;
use std::sync::Arc;

/// Contract every document store backend must fulfil.
///
/// Calls are synchronous request/response operations. Implementations must be
/// `Send + Sync` so one client can serve concurrent callers, and must report
/// their failures through the docstore error kinds:
///
/// * `StoreUnavailable` for transport, authentication or closed-client failures;
/// * `NotFound` from [StoreClientProvider::update] when the document is absent;
/// * `WriteRejected` for validation or permission failures on writes;
/// * `InvalidQuery` for queries the backend cannot execute.
pub trait StoreClientProvider: Send + Sync {
    /// Appends a document to `collection` under a store-generated id.
    ///
    /// The collection is created implicitly if it does not exist.
    fn add(&self, collection: &str, data: Document) -> DocStoreResult<DocumentId>;

    /// Fetches a single document, or `None` if no document has this id.
    fn get(&self, collection: &str, id: &DocumentId) -> DocStoreResult<Option<DocumentSnapshot>>;

    /// Runs a read over `collection`.
    ///
    /// Without a filter every document is returned. With sort options the
    /// result is ordered by the sort field and documents lacking that field
    /// are left out; the limit applies after sorting. A missing collection
    /// yields an empty result.
    fn query(&self, collection: &str, query: &Query) -> DocStoreResult<Vec<DocumentSnapshot>>;

    /// Merges `partial` into an existing document.
    fn update(&self, collection: &str, id: &DocumentId, partial: Document) -> DocStoreResult<()>;

    /// Deletes a document. Returns whether a document was removed.
    fn delete(&self, collection: &str, id: &DocumentId) -> DocStoreResult<bool>;

    /// Releases the client. Later calls fail with `StoreUnavailable`.
    fn close(&self) -> DocStoreResult<()>;

    fn is_closed(&self) -> DocStoreResult<bool>;

    /// Backend name and version, e.g. `InMemory/0.1.0`.
    fn store_version(&self) -> DocStoreResult<String>;
}

/// Shared handle to a store client.
///
/// `StoreClient` wraps any [StoreClientProvider] in an `Arc`; cloning only
/// bumps a reference count and all clones talk to the same backend.
///
/// ```rust
/// use docstore::store::memory::{InMemoryStore, InMemoryStoreConfig};
/// use docstore::store::StoreClient;
///
/// let client = StoreClient::new(InMemoryStore::new(InMemoryStoreConfig::new()));
/// assert!(!client.is_closed().unwrap());
/// ```
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<dyn StoreClientProvider>,
}

impl StoreClient {
    pub fn new<T: StoreClientProvider + 'static>(inner: T) -> Self {
        StoreClient { inner: Arc::new(inner) }
    }
}

impl Deref for StoreClient {
    type Target = Arc<dyn StoreClientProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// A read request: at most one predicate plus sort and limit options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    filter: Option<Filter>,
    options: FindOptions,
}

impl Query {
    pub fn new(filter: Option<Filter>, options: FindOptions) -> Self {
        Query { filter, options }
    }

    /// A query matching every document of a collection.
    pub fn all() -> Self {
        Query::default()
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_options(mut self, options: FindOptions) -> Self {
        self.options = options;
        self
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn options(&self) -> &FindOptions {
        &self.options
    }
}

/// A document as returned by the store: its id and its field map.
///
/// The id is kept apart from the data; the façade merges it into the
/// returned document under the configured id field.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    id: DocumentId,
    data: Document,
}

impl DocumentSnapshot {
    pub fn new(id: DocumentId, data: Document) -> Self {
        DocumentSnapshot { id, data }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn data(&self) -> &Document {
        &self.data
    }

    pub fn into_parts(self) -> (DocumentId, Document) {
        (self.id, self.data)
    }
}
