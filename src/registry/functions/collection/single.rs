//! single() function - returns the sole element of a one-element collection

use crate::model::PathValue;
use crate::registry::function::CardinalityFunction;

/// single() function - returns the sole element of a one-element collection
pub struct SingleFunction;

impl CardinalityFunction for SingleFunction {
    fn name(&self) -> &str {
        "single"
    }
    fn human_friendly_name(&self) -> &str {
        "Single"
    }
    fn documentation(&self) -> &str {
        "Returns the sole item of the input collection when it has exactly one element, absence for any other cardinality. A non-collection input is returned unchanged."
    }

    fn evaluate(&self, context: &PathValue) -> PathValue {
        match context {
            PathValue::Collection(items) => match items.first() {
                Some(value) if items.len() == 1 => PathValue::from_json(value.clone()),
                _ => PathValue::Empty,
            },
            other => other.clone(),
        }
    }
}
