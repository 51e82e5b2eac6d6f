//! Query filters for selecting documents from collections.
//!
//! A read carries at most one predicate: a field, one of the
//! [FilterOperator]s and a value. Filters are built with the fluent API or
//! from the operator's string form:
//!
//! ```rust
//! use docstore::filter::{field, Filter, FilterOperator};
//!
//! let fluent = field("age").lte(25);
//! let parsed = Filter::new("age", "<=".parse::<FilterOperator>().unwrap(), 25);
//! assert_eq!(fluent, parsed);
//! ```

mod filter;
mod fluent;
mod operator;

pub use filter::*;
pub use fluent::*;
pub use operator::*;
