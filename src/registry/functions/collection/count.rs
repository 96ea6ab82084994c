//! count() function - returns the number of elements in the collection

use crate::model::PathValue;
use crate::registry::function::CardinalityFunction;
use serde_json::json;

/// count() function - returns the number of elements in the collection
pub struct CountFunction;

impl CardinalityFunction for CountFunction {
    fn name(&self) -> &str {
        "count"
    }
    fn human_friendly_name(&self) -> &str {
        "Count"
    }
    fn documentation(&self) -> &str {
        "Returns the integer count of items in the input collection. A present non-collection counts as 1; an absent input counts as 0."
    }

    fn evaluate(&self, context: &PathValue) -> PathValue {
        let count = match context {
            PathValue::Collection(items) => items.len(),
            PathValue::Empty => 0,
            PathValue::Single(_) => 1,
        };
        PathValue::Single(json!(count))
    }
}
