use chrono::{DateTime, Utc};
use docstore::collection::{Document, DocumentId};
use docstore::common::Value;
use docstore::doc;
use docstore::docstore::DocStore;
use docstore::errors::DocStoreResult;
use docstore::store::memory::{InMemoryStore, InMemoryStoreConfig};
use fake::faker::address::en::CityName;
use fake::faker::name::en::Name;
use fake::Fake;
use std::backtrace::Backtrace;
use std::time::Instant;

/// Runs a test between its setup and teardown.
///
/// `after` runs even when the test body returns an error. Errors and panics
/// are reported with the elapsed time and then fail the test.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> DocStoreResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> DocStoreResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> DocStoreResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();

    let result = std::panic::catch_unwind(|| {
        let backtrace = Backtrace::capture();
        match before() {
            Ok(ctx) => match test(ctx.clone()) {
                Ok(_) => after(ctx)
                    .map_err(|e| (format!("After run failed: {:?}", e), backtrace.to_string())),
                Err(e) => {
                    let _ = after(ctx);
                    Err((format!("Test failed: {:?}", e), backtrace.to_string()))
                }
            },
            Err(e) => Err((format!("Before run failed: {:?}", e), backtrace.to_string())),
        }
    });

    let elapsed = start_time.elapsed();
    let (error, backtrace) = match result {
        Ok(Ok(_)) => return,
        Ok(Err((e, bt))) => (e, bt),
        Err(panic_err) => {
            let err_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            (format!("Panic: {}", err_msg), Backtrace::capture().to_string())
        }
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {:?}", elapsed);
    eprintln!("Error: {}", error);
    if !backtrace.is_empty() && !backtrace.contains("disabled") {
        eprintln!("\nBacktrace:\n{}", backtrace);
    }
    eprintln!("=====================================================\n");

    panic!("Test failed. Last error: {}", error);
}

#[derive(Clone)]
pub struct TestContext {
    store: DocStore,
    store_config: InMemoryStoreConfig,
}

impl TestContext {
    pub fn new(store: DocStore, store_config: InMemoryStoreConfig) -> Self {
        Self { store, store_config }
    }

    pub fn store(&self) -> DocStore {
        self.store.clone()
    }

    /// Settings of the in-memory store behind the façade.
    pub fn store_config(&self) -> InMemoryStoreConfig {
        self.store_config.clone()
    }
}

pub fn create_test_context() -> DocStoreResult<TestContext> {
    let store_config = InMemoryStoreConfig::new();
    let store = DocStore::builder()
        .store(InMemoryStore::new(store_config.clone()))
        .open()?;
    Ok(TestContext::new(store, store_config))
}

pub fn create_strict_test_context() -> DocStoreResult<TestContext> {
    let store_config = InMemoryStoreConfig::new();
    let store = DocStore::builder()
        .store(InMemoryStore::new(store_config.clone()))
        .strict_delete(true)
        .open()?;
    Ok(TestContext::new(store, store_config))
}

pub fn cleanup(ctx: TestContext) -> DocStoreResult<()> {
    if !ctx.store().is_closed()? {
        ctx.store().close()?;
    }
    Ok(())
}

pub fn create_test_docs() -> Vec<Document> {
    let dt1 = parse_timestamp("2012-07-01T02:15:22+02:00");
    let dt2 = parse_timestamp("2010-06-12T12:05:35+05:30");
    let dt3 = parse_timestamp("2014-04-17T22:25:44-04:00");

    let doc1 = doc! {
        first_name: "fn1",
        last_name: "ln1",
        birth_day: dt1,
        age: 24,
        arr: [1, 2, 3],
        tags: ["admin", "user"],
        address: { city: "Kazan", zip: 420000 },
    };

    let doc2 = doc! {
        first_name: "fn2",
        last_name: "ln2",
        birth_day: dt2,
        age: 35,
        arr: [3, 4, 3],
        tags: ["user"],
        address: { city: "Omsk", zip: 644000 },
    };

    let doc3 = doc! {
        first_name: "fn3",
        last_name: "ln2",
        birth_day: dt3,
        arr: [9, 4, 8],
        tags: [],
        address: { city: "Tver" },
    };

    vec![doc1, doc2, doc3]
}

/// Inserts the three test documents and returns their ids in insertion order.
pub fn insert_test_documents(store: &DocStore, collection: &str) -> DocStoreResult<Vec<DocumentId>> {
    create_test_docs()
        .into_iter()
        .map(|document| store.create_document(collection, document))
        .collect()
}

/// Inserts `count` people with generated names, cities and ages.
pub fn insert_fake_people(store: &DocStore, collection: &str, count: usize) -> DocStoreResult<Vec<DocumentId>> {
    (0..count)
        .map(|_| {
            let name: String = Name().fake();
            let city: String = CityName().fake();
            let age = (18..60).fake::<i64>();
            store.create_document(collection, doc! { name: name, age: age, address: { city: city } })
        })
        .collect()
}

pub fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub fn is_sorted<T: Ord>(iterable: impl IntoIterator<Item = T>, ascending: bool) -> bool {
    let mut iter = iterable.into_iter();
    if let Some(mut prev) = iter.next() {
        for current in iter {
            if ascending {
                if prev > current {
                    return false;
                }
            } else if prev < current {
                return false;
            }
            prev = current;
        }
    }
    true
}

/// Values of `field` in order, for asserting on sorted reads.
pub fn field_values(documents: &[Document], field: &str) -> Vec<Value> {
    documents.iter().map(|d| d.get(field)).collect()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}
