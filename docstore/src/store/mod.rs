//! The store client boundary.
//!
//! A [StoreClient] is the externally supplied database handle the façade
//! delegates transport, authentication and query execution to. Any backend
//! can be plugged in by implementing [StoreClientProvider]; the crate ships
//! [memory::InMemoryStore] for tests and local use.

pub mod memory;
mod store_client;

pub use store_client::*;
