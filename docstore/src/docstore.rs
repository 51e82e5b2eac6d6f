use crate::collection::{order_by, Document, DocumentId, FindOptions};
use crate::common::{SortOrder, Value, PATH_SEPARATOR};
use crate::docstore_builder::DocStoreBuilder;
use crate::docstore_config::DocStoreConfig;
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use crate::filter::{Filter, FilterOperator};
use crate::store::{DocumentSnapshot, Query, StoreClient, StoreClientProvider};
use std::sync::Arc;

/// Typed operations over the collections of a document store.
///
/// `DocStore` owns no data. Every call is one request to the injected
/// [StoreClient]; the façade validates arguments, shapes the query, turns
/// store snapshots into documents carrying their id, and logs the outcome.
/// Failures are logged with the operation, collection and id, then returned
/// to the caller unchanged.
///
/// The handle is cheap to clone and can be shared across threads.
///
/// ```rust
/// use docstore::doc;
/// use docstore::docstore::DocStore;
/// use docstore::common::SortOrder;
///
/// # fn main() -> docstore::errors::DocStoreResult<()> {
/// let store = DocStore::builder().open()?;
///
/// let id = store.create_document("users", doc! { name: "Ivan", age: 30 })?;
/// store.update_document("users", &id, doc! { age: 31 })?;
///
/// let ivan = store.get_document("users", &id)?.unwrap();
/// assert_eq!(ivan.get("id").as_string(), Some(&id.to_string()));
///
/// let oldest = store.get_documents_sorted("users", "age", "desc", Some(1))?;
/// assert_eq!(oldest.len(), 1);
///
/// store.delete_document("users", &id)?;
/// assert!(store.get_document("users", &id)?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DocStore {
    inner: Arc<DocStoreInner>,
}

impl DocStore {
    pub fn builder() -> DocStoreBuilder {
        DocStoreBuilder::new()
    }

    /// Opens a façade over `provider` with default settings.
    pub fn new<T: StoreClientProvider + 'static>(provider: T) -> DocStoreResult<DocStore> {
        DocStoreBuilder::new().store(provider).open()
    }

    pub(crate) fn from_config(config: DocStoreConfig) -> DocStoreResult<DocStore> {
        Ok(DocStore {
            inner: Arc::new(DocStoreInner::new(config)?),
        })
    }

    /// Appends `data` as a new document and returns the store-generated id.
    ///
    /// # Errors
    ///
    /// * `WriteRejected` if `data` carries the id field, or the store refuses the write.
    /// * `StoreUnavailable` if the store cannot be reached.
    pub fn create_document(&self, collection: &str, data: Document) -> DocStoreResult<DocumentId> {
        let result = self.inner.create_document(collection, data);
        match &result {
            Ok(id) => log::info!("Document {} created in {}", id, collection),
            Err(err) => log::error!("create_document failed on {}: {}", collection, err),
        }
        result
    }

    /// Fetches one document by id. A nonexistent document is `Ok(None)`.
    pub fn get_document<I>(&self, collection: &str, id: I) -> DocStoreResult<Option<Document>>
    where
        I: TryInto<DocumentId>,
        I::Error: Into<DocStoreError>,
    {
        let id = self.inner.document_id("get_document", collection, id)?;
        let result = self.inner.get_document(collection, &id);
        match &result {
            Ok(Some(_)) => log::info!("Document {}/{} fetched", collection, id),
            Ok(None) => log::info!("Document {}/{} does not exist", collection, id),
            Err(err) => log::error!("get_document failed on {}/{}: {}", collection, id, err),
        }
        result
    }

    /// Returns every document of `collection`.
    pub fn get_all_documents(&self, collection: &str) -> DocStoreResult<Vec<Document>> {
        self.logged_find("get_all_documents", collection, None, &FindOptions::new())
    }

    /// Returns the documents whose `field` satisfies `operator` against `value`.
    ///
    /// The operator is a [FilterOperator] or its textual form, one of
    /// `==`, `>`, `<`, `>=`, `<=`, `!=` and `array-contains`.
    ///
    /// # Errors
    ///
    /// * `InvalidQuery` for an unsupported operator or a malformed predicate.
    pub fn get_documents_with_filter<O, V>(
        &self,
        collection: &str,
        field: &str,
        operator: O,
        value: V,
    ) -> DocStoreResult<Vec<Document>>
    where
        O: TryInto<FilterOperator>,
        O::Error: Into<DocStoreError>,
        V: Into<Value>,
    {
        let operator = operator.try_into().map_err(|err| {
            let err = err.into();
            log::error!("get_documents_with_filter failed on {}: {}", collection, err);
            err
        })?;

        let filter = Filter::new(field, operator, value);
        self.logged_find(
            "get_documents_with_filter",
            collection,
            Some(filter),
            &FindOptions::new(),
        )
    }

    /// Returns documents ordered by `field`, optionally capped at `limit`.
    ///
    /// The direction is a [SortOrder] or one of `asc`, `ascending`, `desc`
    /// and `descending`. Documents without `field` are not returned. The
    /// relative order of documents with equal values is decided by the store.
    ///
    /// # Errors
    ///
    /// * `InvalidQuery` for an unknown direction, an empty field or a zero limit.
    pub fn get_documents_sorted<S>(
        &self,
        collection: &str,
        field: &str,
        sort_order: S,
        limit: Option<u64>,
    ) -> DocStoreResult<Vec<Document>>
    where
        S: TryInto<SortOrder>,
        S::Error: Into<DocStoreError>,
    {
        let sort_order = sort_order.try_into().map_err(|err| {
            let err = err.into();
            log::error!("get_documents_sorted failed on {}: {}", collection, err);
            err
        })?;

        let mut options = order_by(field, sort_order);
        if let Some(limit) = limit {
            options = options.limit(limit);
        }
        self.logged_find("get_documents_sorted", collection, None, &options)
    }

    /// [DocStore::get_documents_sorted] in the default ascending direction.
    pub fn get_documents_sorted_ascending(
        &self,
        collection: &str,
        field: &str,
        limit: Option<u64>,
    ) -> DocStoreResult<Vec<Document>> {
        self.get_documents_sorted(collection, field, SortOrder::default(), limit)
    }

    /// General read: an optional single predicate plus sort and limit options.
    pub fn find(
        &self,
        collection: &str,
        filter: Option<Filter>,
        find_options: &FindOptions,
    ) -> DocStoreResult<Vec<Document>> {
        self.logged_find("find", collection, filter, find_options)
    }

    /// Merges `partial` into an existing document.
    ///
    /// Each top level field in `partial` replaces the stored value, embedded
    /// documents included. Fields not mentioned are left untouched. To change a
    /// single nested field, read the document, `put` the dotted path and send
    /// the whole top level field back.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the document does not exist.
    /// * `WriteRejected` if `partial` carries the id field, or the store refuses the write.
    pub fn update_document<I>(&self, collection: &str, id: I, partial: Document) -> DocStoreResult<()>
    where
        I: TryInto<DocumentId>,
        I::Error: Into<DocStoreError>,
    {
        let id = self.inner.document_id("update_document", collection, id)?;
        let result = self.inner.update_document(collection, &id, partial);
        match &result {
            Ok(()) => log::info!("Document {}/{} updated", collection, id),
            Err(err) => log::error!("update_document failed on {}/{}: {}", collection, id, err),
        }
        result
    }

    /// Deletes a document.
    ///
    /// Deleting a nonexistent document succeeds unless the store was opened
    /// with `strict_delete`, in which case it fails with `NotFound`.
    pub fn delete_document<I>(&self, collection: &str, id: I) -> DocStoreResult<()>
    where
        I: TryInto<DocumentId>,
        I::Error: Into<DocStoreError>,
    {
        let id = self.inner.document_id("delete_document", collection, id)?;
        let result = self.inner.delete_document(collection, &id);
        match &result {
            Ok(true) => log::info!("Document {}/{} deleted", collection, id),
            Ok(false) => log::info!("Document {}/{} was already absent", collection, id),
            Err(err) => log::error!("delete_document failed on {}/{}: {}", collection, id, err),
        }
        result.map(|_| ())
    }

    /// Closes the underlying store client.
    pub fn close(&self) -> DocStoreResult<()> {
        self.inner.store_client.close()
    }

    pub fn is_closed(&self) -> DocStoreResult<bool> {
        self.inner.store_client.is_closed()
    }

    pub fn config(&self) -> DocStoreConfig {
        self.inner.config.clone()
    }

    pub fn store_client(&self) -> StoreClient {
        self.inner.store_client.clone()
    }

    fn logged_find(
        &self,
        operation: &str,
        collection: &str,
        filter: Option<Filter>,
        find_options: &FindOptions,
    ) -> DocStoreResult<Vec<Document>> {
        let result = self.inner.find(collection, filter, find_options);
        match &result {
            Ok(documents) => {
                log::info!("{} returned {} documents from {}", operation, documents.len(), collection)
            }
            Err(err) => log::error!("{} failed on {}: {}", operation, collection, err),
        }
        result
    }
}

struct DocStoreInner {
    config: DocStoreConfig,
    id_field: String,
    store_client: StoreClient,
}

impl DocStoreInner {
    fn new(config: DocStoreConfig) -> DocStoreResult<Self> {
        Ok(DocStoreInner {
            id_field: config.id_field(),
            store_client: config.store_client()?,
            config,
        })
    }

    fn create_document(&self, collection: &str, data: Document) -> DocStoreResult<DocumentId> {
        self.validate_collection_name(collection)?;
        self.check_no_id_field(&data)?;
        self.store_client.add(collection, data)
    }

    fn get_document(&self, collection: &str, id: &DocumentId) -> DocStoreResult<Option<Document>> {
        self.validate_collection_name(collection)?;
        match self.store_client.get(collection, id)? {
            Some(snapshot) => Ok(Some(self.to_document(snapshot)?)),
            None => Ok(None),
        }
    }

    fn find(
        &self,
        collection: &str,
        filter: Option<Filter>,
        find_options: &FindOptions,
    ) -> DocStoreResult<Vec<Document>> {
        self.validate_collection_name(collection)?;
        if let Some(filter) = &filter {
            filter.validate()?;
        }
        find_options.validate()?;

        let query = Query::new(filter, find_options.clone());
        self.store_client
            .query(collection, &query)?
            .into_iter()
            .map(|snapshot| self.to_document(snapshot))
            .collect()
    }

    fn update_document(&self, collection: &str, id: &DocumentId, partial: Document) -> DocStoreResult<()> {
        self.validate_collection_name(collection)?;
        self.check_no_id_field(&partial)?;
        self.store_client.update(collection, id, partial)
    }

    fn delete_document(&self, collection: &str, id: &DocumentId) -> DocStoreResult<bool> {
        self.validate_collection_name(collection)?;
        let removed = self.store_client.delete(collection, id)?;
        if !removed && self.config.strict_delete() {
            log::error!("Document {}/{} does not exist", collection, id);
            return Err(DocStoreError::new(
                &format!("Document {}/{} does not exist", collection, id),
                ErrorKind::NotFound,
            ));
        }
        Ok(removed)
    }

    fn document_id<I>(&self, operation: &str, collection: &str, id: I) -> DocStoreResult<DocumentId>
    where
        I: TryInto<DocumentId>,
        I::Error: Into<DocStoreError>,
    {
        id.try_into().map_err(|err| {
            let err = err.into();
            log::error!("{} failed on {}: {}", operation, collection, err);
            err
        })
    }

    fn to_document(&self, snapshot: DocumentSnapshot) -> DocStoreResult<Document> {
        let (id, mut data) = snapshot.into_parts();
        data.put(&self.id_field, id.as_str())?;
        Ok(data)
    }

    fn check_no_id_field(&self, data: &Document) -> DocStoreResult<()> {
        if data.contains_key(&self.id_field) {
            log::error!("Document data cannot set the '{}' field", self.id_field);
            return Err(DocStoreError::new(
                &format!("Document data cannot set the '{}' field", self.id_field),
                ErrorKind::WriteRejected,
            ));
        }
        Ok(())
    }

    fn validate_collection_name(&self, name: &str) -> DocStoreResult<()> {
        if name.is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(DocStoreError::new(
                "Collection name cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }

        if name.contains(PATH_SEPARATOR) {
            log::error!("Collection name '{}' cannot contain '{}'", name, PATH_SEPARATOR);
            return Err(DocStoreError::new(
                &format!("Collection name '{}' cannot contain '{}'", name, PATH_SEPARATOR),
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }
}
