use crate::errors::{DocStoreError, ErrorKind};
use std::fmt::Display;
use std::str::FromStr;

/// Specifies the direction for sorting documents.
///
/// Defaults to `Ascending`. The string forms `"asc"`/`"ascending"` and
/// `"desc"`/`"descending"` are accepted case-insensitively:
/// ```rust
/// use docstore::common::SortOrder;
///
/// let order: SortOrder = "desc".parse().unwrap();
/// assert_eq!(order, SortOrder::Descending);
/// assert!("sideways".parse::<SortOrder>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort from smallest to largest value
    #[default]
    Ascending,
    /// Sort from largest to smallest value
    Descending,
}

impl FromStr for SortOrder {
    type Err = DocStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => {
                log::error!("Unsupported sort direction {:?}", s);
                Err(DocStoreError::new(
                    &format!("Unsupported sort direction '{}', expected 'asc' or 'desc'", s),
                    ErrorKind::InvalidQuery,
                ))
            }
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = DocStoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}
