use crate::collection::Document;
use crate::common::Value;
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use std::cmp::Ordering;
use std::fmt::Display;

use super::FilterOperator;

/// A single `(field, operator, value)` predicate restricting a read.
///
/// Stores that execute queries themselves only need the three parts; stores
/// that evaluate locally call [Filter::apply]. Matching follows the hosted
/// store's rules:
///
/// * a document without the field never matches, `!=` included;
/// * range operators only match values of the same kind as the operand, so
///   `age < 30` ignores documents whose `age` is a string;
/// * `array-contains` matches when the field is an array holding the operand.
///
/// ```rust
/// use docstore::doc;
/// use docstore::filter::field;
///
/// let young = field("age").lte(25);
/// assert!(young.apply(&doc! { age: 20 }));
/// assert!(!young.apply(&doc! { age: 30 }));
/// assert!(!young.apply(&doc! { name: "no age" }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field_name: String,
    operator: FilterOperator,
    field_value: Value,
}

impl Filter {
    pub fn new<T: Into<Value>>(field_name: &str, operator: FilterOperator, value: T) -> Self {
        Filter {
            field_name: field_name.to_string(),
            operator,
            field_value: value.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn field_value(&self) -> &Value {
        &self.field_value
    }

    /// Checks the predicate is well formed.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidQuery` if the field name is empty or a range
    /// operator is used against null.
    pub fn validate(&self) -> DocStoreResult<()> {
        if self.field_name.is_empty() {
            log::error!("Filter field name cannot be empty");
            return Err(DocStoreError::new(
                "Filter field name cannot be empty",
                ErrorKind::InvalidQuery,
            ));
        }

        if self.operator.is_range() && self.field_value.is_null() {
            let message = format!(
                "Range filter {} cannot compare against {}",
                self,
                self.field_value.kind_name()
            );
            log::error!("{}", message);
            return Err(DocStoreError::new(
                &message,
                ErrorKind::InvalidQuery,
            ));
        }
        Ok(())
    }

    /// Evaluates the predicate against a document.
    pub fn apply(&self, entry: &Document) -> bool {
        if !entry.contains_field(&self.field_name) {
            return false;
        }

        let value = entry.get(&self.field_name);
        match self.operator {
            FilterOperator::Equals => value == self.field_value,
            FilterOperator::NotEquals => value != self.field_value,
            FilterOperator::ArrayContains => value
                .as_array()
                .map(|array| array.contains(&self.field_value))
                .unwrap_or(false),
            FilterOperator::GreaterThan => self.compare(&value, |o| o == Ordering::Greater),
            FilterOperator::GreaterOrEqual => self.compare(&value, |o| o != Ordering::Less),
            FilterOperator::LessThan => self.compare(&value, |o| o == Ordering::Less),
            FilterOperator::LessOrEqual => self.compare(&value, |o| o != Ordering::Greater),
        }
    }

    #[inline]
    fn compare(&self, value: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
        value.same_kind(&self.field_value) && accept(value.cmp(&self.field_value))
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.field_name, self.operator, self.field_value)
    }
}
