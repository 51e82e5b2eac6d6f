use super::InMemoryStoreConfig;
use crate::collection::{Document, DocumentId};
use crate::common::SortOrder;
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use crate::store::{DocumentSnapshot, Query, StoreClientProvider};
use dashmap::DashMap;
use itertools::Itertools;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type CollectionData = Arc<RwLock<BTreeMap<DocumentId, Document>>>;

/// In-memory implementation of a store client.
///
/// Collections live in a concurrent registry and are created on first write.
/// Each collection keeps its documents ordered by id, so unsorted reads come
/// back in id order. Queries are evaluated locally with [Filter::apply] and
/// follow the hosted store's rules: a sort leaves out documents that lack the
/// sort field, ties keep id order and the limit is taken after sorting.
///
/// All data is lost when the store is closed.
///
/// ```rust
/// use docstore::doc;
/// use docstore::store::memory::{InMemoryStore, InMemoryStoreConfig};
/// use docstore::store::{Query, StoreClientProvider};
///
/// let store = InMemoryStore::new(InMemoryStoreConfig::new());
/// let id = store.add("users", doc! { name: "Ivan" }).unwrap();
/// assert_eq!(id.as_str().len(), 20);
/// assert_eq!(store.query("users", &Query::all()).unwrap().len(), 1);
/// ```
///
/// [Filter::apply]: crate::filter::Filter::apply
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new(store_config: InMemoryStoreConfig) -> InMemoryStore {
        InMemoryStore {
            inner: Arc::new(InMemoryStoreInner::new(store_config)),
        }
    }

    pub fn store_config(&self) -> InMemoryStoreConfig {
        self.inner.store_config.clone()
    }

    /// Names of the collections holding at least one write so far.
    pub fn collection_names(&self) -> DocStoreResult<Vec<String>> {
        self.inner.check_opened()?;
        Ok(self
            .inner
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .sorted()
            .collect())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new(InMemoryStoreConfig::new())
    }
}

impl StoreClientProvider for InMemoryStore {
    fn add(&self, collection: &str, data: Document) -> DocStoreResult<DocumentId> {
        self.inner.add(collection, data)
    }

    fn get(&self, collection: &str, id: &DocumentId) -> DocStoreResult<Option<DocumentSnapshot>> {
        self.inner.get(collection, id)
    }

    fn query(&self, collection: &str, query: &Query) -> DocStoreResult<Vec<DocumentSnapshot>> {
        self.inner.query(collection, query)
    }

    fn update(&self, collection: &str, id: &DocumentId, partial: Document) -> DocStoreResult<()> {
        self.inner.update(collection, id, partial)
    }

    fn delete(&self, collection: &str, id: &DocumentId) -> DocStoreResult<bool> {
        self.inner.delete(collection, id)
    }

    fn close(&self) -> DocStoreResult<()> {
        self.inner.close()
    }

    fn is_closed(&self) -> DocStoreResult<bool> {
        Ok(self.inner.closed.load(Ordering::Relaxed))
    }

    fn store_version(&self) -> DocStoreResult<String> {
        Ok(format!("InMemory/{}", env!("CARGO_PKG_VERSION")))
    }
}

struct InMemoryStoreInner {
    closed: AtomicBool,
    store_config: InMemoryStoreConfig,
    collections: DashMap<String, CollectionData>,
}

impl InMemoryStoreInner {
    fn new(store_config: InMemoryStoreConfig) -> InMemoryStoreInner {
        InMemoryStoreInner {
            closed: AtomicBool::from(false),
            store_config,
            collections: DashMap::new(),
        }
    }

    fn check_opened(&self) -> DocStoreResult<()> {
        if self.closed.load(Ordering::Relaxed) {
            log::error!("In-memory store is closed");
            return Err(DocStoreError::new(
                "In-memory store is closed",
                ErrorKind::StoreUnavailable,
            ));
        }
        Ok(())
    }

    fn check_writable(&self, collection: &str) -> DocStoreResult<()> {
        self.check_opened()?;
        if self.store_config.is_read_only() {
            log::error!("Write to {} rejected, store is read-only", collection);
            return Err(DocStoreError::new(
                &format!("Write to {} rejected, store is read-only", collection),
                ErrorKind::WriteRejected,
            ));
        }
        Ok(())
    }

    fn collection(&self, name: &str) -> Option<CollectionData> {
        self.collections.get(name).map(|entry| entry.value().clone())
    }

    fn collection_or_create(&self, name: &str) -> CollectionData {
        // clone the handle out so the registry shard is not held while writing
        self.collections
            .entry(name.to_string())
            .or_default()
            .value()
            .clone()
    }

    fn add(&self, collection: &str, data: Document) -> DocStoreResult<DocumentId> {
        self.check_writable(collection)?;

        let documents = self.collection_or_create(collection);
        self.insert_new(&documents, data)
    }

    fn insert_new(&self, documents: &CollectionData, data: Document) -> DocStoreResult<DocumentId> {
        let id_length = self.store_config.id_length();
        let mut documents = documents.write();
        // the store may have been closed while waiting for the lock
        self.check_opened()?;

        let mut id = DocumentId::generate(id_length);
        while documents.contains_key(&id) {
            id = DocumentId::generate(id_length);
        }
        documents.insert(id.clone(), data);
        Ok(id)
    }

    fn get(&self, collection: &str, id: &DocumentId) -> DocStoreResult<Option<DocumentSnapshot>> {
        self.check_opened()?;

        let snapshot = match self.collection(collection) {
            Some(documents) => {
                let documents = documents.read();
                documents
                    .get(id)
                    .map(|data| DocumentSnapshot::new(id.clone(), data.clone()))
            }
            None => None,
        };
        Ok(snapshot)
    }

    fn query(&self, collection: &str, query: &Query) -> DocStoreResult<Vec<DocumentSnapshot>> {
        self.check_opened()?;
        if let Some(filter) = query.filter() {
            filter.validate()?;
        }
        query.options().validate()?;

        let result = match self.collection(collection) {
            Some(documents) => {
                let documents = documents.read();
                execute(&documents, query)
            }
            None => Vec::new(),
        };
        Ok(result)
    }

    fn update(&self, collection: &str, id: &DocumentId, partial: Document) -> DocStoreResult<()> {
        self.check_writable(collection)?;

        let existing = match self.collection(collection) {
            Some(documents) => {
                let mut documents = documents.write();
                self.check_opened()?;
                match documents.get_mut(id) {
                    Some(data) => {
                        data.merge(&partial);
                        true
                    }
                    None => false,
                }
            }
            None => false,
        };

        if !existing {
            log::error!("Document {}/{} does not exist", collection, id);
            return Err(DocStoreError::new(
                &format!("Document {}/{} does not exist", collection, id),
                ErrorKind::NotFound,
            ));
        }
        Ok(())
    }

    fn delete(&self, collection: &str, id: &DocumentId) -> DocStoreResult<bool> {
        self.check_writable(collection)?;

        let removed = match self.collection(collection) {
            Some(documents) => {
                let mut documents = documents.write();
                self.check_opened()?;
                documents.remove(id).is_some()
            }
            None => false,
        };
        Ok(removed)
    }

    fn close(&self) -> DocStoreResult<()> {
        if self.closed.swap(true, Ordering::Relaxed) {
            return Ok(());
        }
        // writers holding a collection handle observe the flag under its lock
        for entry in self.collections.iter() {
            entry.value().write().clear();
        }
        self.collections.clear();
        Ok(())
    }
}

fn execute(documents: &BTreeMap<DocumentId, Document>, query: &Query) -> Vec<DocumentSnapshot> {
    let matching = documents
        .iter()
        .filter(|(_, data)| query.filter().map_or(true, |filter| filter.apply(data)));

    let ordered: Vec<(&DocumentId, &Document)> = match query.options().sort_field() {
        Some((field_name, sort_order)) => matching
            .filter(|(_, data)| data.contains_field(field_name))
            .map(|(id, data)| (data.get(field_name), id, data))
            // stable sort, equal keys keep id order
            .sorted_by(|(a, ..), (b, ..)| match sort_order {
                SortOrder::Ascending => a.cmp(b),
                SortOrder::Descending => b.cmp(a),
            })
            .map(|(_, id, data)| (id, data))
            .collect(),
        None => matching.collect(),
    };

    let limit = query
        .options()
        .limit_count()
        .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
        .unwrap_or(usize::MAX);

    ordered
        .into_iter()
        .take(limit)
        .map(|(id, data)| DocumentSnapshot::new(id.clone(), data.clone()))
        .collect()
}
