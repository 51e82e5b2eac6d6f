use crate::errors::{DocStoreError, ErrorKind};
use std::fmt::Display;
use std::str::FromStr;

/// Comparison operators accepted by a single-predicate filter.
///
/// Each operator has the string form the hosted store uses in its query API,
/// which is what [FromStr] and `TryFrom<&str>` accept:
///
/// | operator          | text               |
/// |-------------------|--------------------|
/// | `Equals`          | `==`               |
/// | `GreaterThan`     | `>`                |
/// | `LessThan`        | `<`                |
/// | `GreaterOrEqual`  | `>=`               |
/// | `LessOrEqual`     | `<=`               |
/// | `NotEquals`       | `!=`               |
/// | `ArrayContains`   | `array-contains`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equals,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    NotEquals,
    ArrayContains,
}

impl FilterOperator {
    /// Every supported operator.
    pub const ALL: [FilterOperator; 7] = [
        FilterOperator::Equals,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::GreaterOrEqual,
        FilterOperator::LessOrEqual,
        FilterOperator::NotEquals,
        FilterOperator::ArrayContains,
    ];

    /// The store's textual form of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "==",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessOrEqual => "<=",
            FilterOperator::NotEquals => "!=",
            FilterOperator::ArrayContains => "array-contains",
        }
    }

    /// Returns `true` for `>`, `<`, `>=` and `<=`.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            FilterOperator::GreaterThan
                | FilterOperator::LessThan
                | FilterOperator::GreaterOrEqual
                | FilterOperator::LessOrEqual
        )
    }
}

impl FromStr for FilterOperator {
    type Err = DocStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOperator::ALL
            .iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| {
                log::error!("Unsupported filter operator {:?}", s);
                DocStoreError::new(
                    &format!("Unsupported filter operator '{}'", s),
                    ErrorKind::InvalidQuery,
                )
            })
    }
}

impl TryFrom<&str> for FilterOperator {
    type Error = DocStoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
