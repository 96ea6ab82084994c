//! exists() function - whether the collection has any elements

use crate::model::PathValue;
use crate::registry::function::CardinalityFunction;
use serde_json::json;

/// exists() function - whether the collection has any elements
pub struct ExistsFunction;

impl CardinalityFunction for ExistsFunction {
    fn name(&self) -> &str {
        "exists"
    }
    fn human_friendly_name(&self) -> &str {
        "Exists"
    }
    fn documentation(&self) -> &str {
        "Returns true when the input collection has at least one element or the input is a present non-collection, false otherwise."
    }

    fn evaluate(&self, context: &PathValue) -> PathValue {
        let exists = match context {
            PathValue::Collection(items) => !items.is_empty(),
            PathValue::Empty => false,
            PathValue::Single(_) => true,
        };
        PathValue::Single(json!(exists))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Collection;

    #[test]
    fn complements_empty_for_collections() {
        let full = PathValue::Collection(Collection::from_vec(vec![json!(1)]));
        assert_eq!(ExistsFunction.evaluate(&full), PathValue::Single(json!(true)));
        let hollow = PathValue::Collection(Collection::new());
        assert_eq!(
            ExistsFunction.evaluate(&hollow),
            PathValue::Single(json!(false))
        );
    }

    #[test]
    fn absence_does_not_exist() {
        assert_eq!(
            ExistsFunction.evaluate(&PathValue::Empty),
            PathValue::Single(json!(false))
        );
    }
}
