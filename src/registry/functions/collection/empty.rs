//! empty() function - whether the collection has no elements

use crate::model::PathValue;
use crate::registry::function::CardinalityFunction;
use serde_json::json;

/// empty() function - whether the collection has no elements
pub struct EmptyFunction;

impl CardinalityFunction for EmptyFunction {
    fn name(&self) -> &str {
        "empty"
    }
    fn human_friendly_name(&self) -> &str {
        "Empty"
    }
    fn documentation(&self) -> &str {
        "Returns true when the input collection has no elements or the input is absent, false otherwise."
    }

    fn evaluate(&self, context: &PathValue) -> PathValue {
        let empty = match context {
            PathValue::Collection(items) => items.is_empty(),
            PathValue::Empty => true,
            PathValue::Single(_) => false,
        };
        PathValue::Single(json!(empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Collection;

    #[test]
    fn absent_and_zero_length_inputs_are_empty() {
        assert_eq!(
            EmptyFunction.evaluate(&PathValue::Empty),
            PathValue::Single(json!(true))
        );
        assert_eq!(
            EmptyFunction.evaluate(&PathValue::Collection(Collection::new())),
            PathValue::Single(json!(true))
        );
    }

    #[test]
    fn present_values_are_not_empty() {
        assert_eq!(
            EmptyFunction.evaluate(&PathValue::Single(json!(0))),
            PathValue::Single(json!(false))
        );
    }
}
