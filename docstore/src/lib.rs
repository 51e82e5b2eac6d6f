//! # docstore - typed façade over a document database
//!
//! `docstore` exposes create, read, update and delete operations over named
//! collections of schema-less documents. Transport, authentication and query
//! execution belong to an injected store client; the façade validates
//! arguments, shapes queries, attaches ids to returned documents and logs the
//! outcome of every call.
//!
//! ## Quick Start
//!
//! ```rust
//! use docstore::doc;
//! use docstore::docstore::DocStore;
//!
//! # fn main() -> docstore::errors::DocStoreResult<()> {
//! let store = DocStore::builder().open()?;
//!
//! let id = store.create_document("users", doc! { name: "Ivan", age: 30 })?;
//! let young = store.get_documents_with_filter("users", "age", "<=", 30)?;
//! assert_eq!(young.len(), 1);
//!
//! store.delete_document("users", &id)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents, document ids and find options
//! - [`common`] - Values, sort order and constants
//! - [`docstore`] - The façade
//! - [`docstore_builder`] - Builder for opening a façade
//! - [`docstore_config`] - Façade configuration
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Single-predicate query filters
//! - [`store`] - Store client boundary and the in-memory store

pub mod collection;
pub mod common;
pub mod docstore;
pub mod docstore_builder;
pub mod docstore_config;
pub mod errors;
pub mod filter;
pub mod store;

pub use crate::collection::{Document, DocumentId, FindOptions};
pub use crate::common::{SortOrder, Value};
pub use crate::docstore::DocStore;
pub use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
pub use crate::filter::{Filter, FilterOperator};
