//! last() function - returns the last element of the collection

use crate::model::PathValue;
use crate::registry::function::CardinalityFunction;

/// last() function - returns the last element of the collection
pub struct LastFunction;

impl CardinalityFunction for LastFunction {
    fn name(&self) -> &str {
        "last"
    }
    fn human_friendly_name(&self) -> &str {
        "Last"
    }
    fn documentation(&self) -> &str {
        "Returns the last item of the input collection. A non-collection input is returned unchanged."
    }

    fn evaluate(&self, context: &PathValue) -> PathValue {
        match context {
            PathValue::Collection(items) => match items.last() {
                Some(value) => PathValue::from_json(value.clone()),
                None => context.clone(),
            },
            other => other.clone(),
        }
    }
}
