use im::OrdMap;
use smallvec::SmallVec;

use crate::common::{Value, FIELD_SEPARATOR};
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use std::fmt::{Debug, Display};

type FieldVec = SmallVec<[String; 8]>;

/// A schema-less record: an ordered mapping from field name to [Value].
///
/// Documents may nest other documents. A nested field is addressed with a
/// dotted path, so `{"address": {"city": "Kazan"}}` answers
/// `document.get("address.city")`. Array elements are addressable by index
/// (`"tags.0"`).
///
/// The backing map is a persistent `im::OrdMap`: cloning a document is O(1)
/// and mutations share structure with the original.
///
/// ```rust
/// use docstore::doc;
/// use docstore::common::Value;
///
/// let user = doc! { "name": "Ivan", "address": { "city": "Kazan" } };
/// assert_eq!(user.get("address.city"), Value::from("Kazan"));
/// assert_eq!(user.get("missing"), Value::Null);
/// ```
#[derive(Clone, Eq, PartialEq, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of top level entries.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates `value` with `key`, replacing any previous value.
    ///
    /// A dotted key writes into nested documents, creating them as needed. A
    /// non-document value standing in the way of the path is replaced.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidOperation` if the key or one of its path segments
    /// is empty.
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> DocStoreResult<()> {
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(DocStoreError::new(
                "Document does not support empty key",
                ErrorKind::InvalidOperation,
            ));
        }

        let value = value.into();
        if key.contains(FIELD_SEPARATOR) {
            let splits: Vec<&str> = key.split(FIELD_SEPARATOR).collect();
            self.deep_put(&splits, value)
        } else {
            self.data.insert(key.to_string(), value);
            Ok(())
        }
    }

    /// Returns the value at `key`, or [Value::Null] if there is none.
    ///
    /// A top level key containing the separator wins over the embedded path.
    pub fn get(&self, key: &str) -> Value {
        match self.data.get(key) {
            Some(value) => value.clone(),
            None if key.contains(FIELD_SEPARATOR) => self.deep_get(key),
            None => Value::Null,
        }
    }

    /// Checks if a top level key exists in the document.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Checks if a top level or embedded field exists in the document.
    ///
    /// A field explicitly set to null exists.
    pub fn contains_field(&self, field: &str) -> bool {
        if self.contains_key(field) {
            return true;
        }
        if !field.contains(FIELD_SEPARATOR) {
            return false;
        }

        let (parent, leaf) = match field.rsplit_once(FIELD_SEPARATOR) {
            Some(split) => split,
            None => return false,
        };
        match self.get(parent) {
            Value::Document(doc) => doc.contains_key(leaf),
            Value::Array(array) => leaf
                .parse::<usize>()
                .map(|index| index < array.len())
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Removes the key and its value. Removing a missing key is a no-op.
    pub fn remove(&mut self, key: &str) {
        if self.data.remove(key).is_some() || !key.contains(FIELD_SEPARATOR) {
            return;
        }
        let splits: Vec<&str> = key.split(FIELD_SEPARATOR).collect();
        self.deep_remove(&splits);
    }

    /// Merges `other` into this document at the top level.
    ///
    /// Every key of `other` replaces the value held under it, embedded
    /// documents included. Fields absent from `other` are left untouched.
    ///
    /// ```rust
    /// use docstore::doc;
    ///
    /// let mut user = doc! { "name": "Ivan", "address": { "city": "Omsk", "zip": 644000 } };
    /// user.merge(&doc! { "address": { "city": "Kazan" } });
    /// assert_eq!(user, doc! { "name": "Ivan", "address": { "city": "Kazan" } });
    /// ```
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.data.iter() {
            self.data.insert(key.clone(), value.clone());
        }
    }

    /// Retrieves every leaf field path in the document.
    ///
    /// Nested documents contribute dotted paths; arrays count as leaves.
    pub fn fields(&self) -> FieldVec {
        let mut fields = FieldVec::new();
        self.collect_fields("", &mut fields);
        fields
    }

    /// Iterates over the top level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    fn collect_fields(&self, prefix: &str, fields: &mut FieldVec) {
        for (key, value) in self.data.iter() {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}{}{}", prefix, FIELD_SEPARATOR, key)
            };

            match value {
                Value::Document(nested) if !nested.is_empty() => nested.collect_fields(&path, fields),
                _ => fields.push(path),
            }
        }
    }

    fn deep_put(&mut self, splits: &[&str], value: Value) -> DocStoreResult<()> {
        let (head, rest) = match splits.split_first() {
            Some((head, rest)) if !head.is_empty() => (*head, rest),
            _ => {
                log::error!("Invalid embedded field path {:?}", splits.join(FIELD_SEPARATOR));
                return Err(DocStoreError::new(
                    &format!("Invalid embedded field path '{}'", splits.join(FIELD_SEPARATOR)),
                    ErrorKind::InvalidOperation,
                ));
            }
        };

        if rest.is_empty() {
            self.data.insert(head.to_string(), value);
            return Ok(());
        }

        let mut nested = match self.data.get(head) {
            Some(Value::Document(existing)) => existing.clone(),
            _ => Document::new(),
        };
        nested.deep_put(rest, value)?;
        self.data.insert(head.to_string(), Value::Document(nested));
        Ok(())
    }

    fn deep_get(&self, key: &str) -> Value {
        let mut segments = key.split(FIELD_SEPARATOR);
        let mut current = match segments.next().and_then(|head| self.data.get(head)) {
            Some(value) => value,
            None => return Value::Null,
        };

        for segment in segments {
            let next = match current {
                Value::Document(doc) => doc.data.get(segment),
                Value::Array(array) => segment.parse::<usize>().ok().and_then(|i| array.get(i)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Value::Null,
            }
        }
        current.clone()
    }

    fn deep_remove(&mut self, splits: &[&str]) {
        match splits {
            [] => {}
            [leaf] => {
                self.data.remove(*leaf);
            }
            [head, rest @ ..] => {
                if let Some(Value::Document(nested)) = self.data.get_mut(*head) {
                    nested.deep_remove(rest);
                }
            }
        }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

/// Strips the quotes `stringify!` leaves around string literal keys.
#[doc(hidden)]
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Builds a [Document] from a literal.
///
/// Keys are identifiers or string literals, values are literals, nested
/// `{ ... }` documents, `[ ... ]` arrays or parenthesized expressions.
///
/// ```rust
/// use docstore::doc;
///
/// let base = 30;
/// let user = doc! {
///     name: "Ivan",
///     "email": "ivan@example.com",
///     age: (base + 1),
///     tags: ["admin", "user"],
///     address: { city: "Kazan" }
/// };
/// assert_eq!(user.size(), 5);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::collection::Document::new()
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                    .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
#[doc(hidden)]
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
