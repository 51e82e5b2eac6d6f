use crate::common::Value;

use super::{Filter, FilterOperator};

/// Creates a fluent filter builder for the specified field name.
///
/// ```rust
/// use docstore::filter::{field, FilterOperator};
///
/// let filter = field("age").lte(25);
/// assert_eq!(filter.operator(), FilterOperator::LessOrEqual);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// A fluent builder for a filter on one field.
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    #[inline]
    fn build<T: Into<Value>>(self, operator: FilterOperator, value: T) -> Filter {
        Filter::new(&self.field_name, operator, value)
    }

    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::Equals, value)
    }

    #[inline]
    pub fn ne<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::NotEquals, value)
    }

    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::GreaterThan, value)
    }

    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::GreaterOrEqual, value)
    }

    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::LessThan, value)
    }

    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::LessOrEqual, value)
    }

    /// Matches documents whose array field contains `value`.
    #[inline]
    pub fn array_contains<T: Into<Value>>(self, value: T) -> Filter {
        self.build(FilterOperator::ArrayContains, value)
    }
}
