use crate::common::SortOrder;
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};

/// Options for controlling find operations on a collection.
///
/// At most one sort field is supported, optionally combined with a maximum
/// result count.
///
/// ```rust
/// use docstore::collection::{order_by, FindOptions};
/// use docstore::common::SortOrder;
///
/// let options = order_by("age", SortOrder::Descending).limit(10);
/// assert_eq!(options.limit_count(), Some(10));
///
/// let options = FindOptions::new().sort_by("name", SortOrder::Ascending);
/// assert_eq!(options.sort_field(), Some(("name", SortOrder::Ascending)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub(crate) sort_by: Option<(String, SortOrder)>,
    pub(crate) limit: Option<u64>,
}

/// Creates `FindOptions` with sorting by a field.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions {
        sort_by: Some((field_name.to_string(), sort_order)),
        limit: None,
    }
}

/// Creates `FindOptions` that limits the number of results.
pub fn limit_to(limit: u64) -> FindOptions {
    FindOptions {
        sort_by: None,
        limit: Some(limit),
    }
}

impl FindOptions {
    /// Creates a new `FindOptions` with no ordering and no limit.
    pub fn new() -> FindOptions {
        FindOptions::default()
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: u64) -> FindOptions {
        self.limit = Some(limit);
        self
    }

    /// Orders results by `field_name`, replacing any previous ordering.
    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> FindOptions {
        self.sort_by = Some((field_name.to_string(), sort_order));
        self
    }

    pub fn sort_field(&self) -> Option<(&str, SortOrder)> {
        self.sort_by
            .as_ref()
            .map(|(field, order)| (field.as_str(), *order))
    }

    pub fn limit_count(&self) -> Option<u64> {
        self.limit
    }

    /// Checks the options are well formed.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidQuery` for an empty sort field or a zero limit.
    pub fn validate(&self) -> DocStoreResult<()> {
        if let Some((field, _)) = &self.sort_by {
            if field.is_empty() {
                log::error!("Sort field cannot be empty");
                return Err(DocStoreError::new(
                    "Sort field cannot be empty",
                    ErrorKind::InvalidQuery,
                ));
            }
        }

        if self.limit == Some(0) {
            log::error!("Limit must be greater than zero");
            return Err(DocStoreError::new(
                "Limit must be greater than zero",
                ErrorKind::InvalidQuery,
            ));
        }
        Ok(())
    }
}
