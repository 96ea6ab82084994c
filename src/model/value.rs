//! Core value types threaded through path evaluation

use serde_json::Value;

/// The evaluation context threaded through the segment fold.
///
/// Every segment consumes one of these and produces the next. All values in
/// the dialect are conceptually collections, but single values are
/// represented directly. `Empty` marks a path that did not resolve;
/// navigation over it stays empty, while cardinality functions still observe
/// it (so `missing.count()` is `0` rather than absent).
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue {
    /// Absent value
    Empty,

    /// A single scalar or object
    Single(Value),

    /// An ordered sequence produced by navigating array-valued fields
    Collection(Collection),
}

impl PathValue {
    /// Lift a JSON value into a context: `null` becomes `Empty`, arrays
    /// become collections, everything else is a single value.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => PathValue::Empty,
            Value::Array(items) => PathValue::Collection(Collection::from_vec(items)),
            other => PathValue::Single(other),
        }
    }

    /// Lower the context back to a JSON value; `Empty` has no value.
    pub fn into_json(self) -> Option<Value> {
        match self {
            PathValue::Empty => None,
            PathValue::Single(value) => Some(value),
            PathValue::Collection(items) => Some(Value::Array(items.into_vec())),
        }
    }

    /// Whether the context holds no value at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, PathValue::Empty)
    }
}

/// Collection type that wraps a vector of JSON values.
///
/// Insertion order is document order; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection(Vec<Value>);

impl Collection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a collection from a vector
    pub fn from_vec(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Get the length of the collection
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator over the values
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Get the first value
    pub fn first(&self) -> Option<&Value> {
        self.0.first()
    }

    /// Get the last value
    pub fn last(&self) -> Option<&Value> {
        self.0.last()
    }

    /// Get an element by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Push a value to the collection
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Take ownership of the inner vector
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Collection {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_lifts_null_to_empty() {
        assert_eq!(PathValue::from_json(json!(null)), PathValue::Empty);
    }

    #[test]
    fn from_json_lifts_arrays_to_collections() {
        let value = PathValue::from_json(json!([1, 2]));
        match value {
            PathValue::Collection(items) => assert_eq!(items.len(), 2),
            other => panic!("expected collection, got {other:?}"),
        }
    }

    #[test]
    fn into_json_round_trips_collections_as_arrays() {
        let value = PathValue::from_json(json!(["a", "b"]));
        assert_eq!(value.into_json(), Some(json!(["a", "b"])));
    }

    #[test]
    fn empty_has_no_json_value() {
        assert_eq!(PathValue::Empty.into_json(), None);
    }
}
