//! first() function - returns the first element of the collection

use crate::model::PathValue;
use crate::registry::function::CardinalityFunction;

/// first() function - returns the first element of the collection
pub struct FirstFunction;

impl CardinalityFunction for FirstFunction {
    fn name(&self) -> &str {
        "first"
    }
    fn human_friendly_name(&self) -> &str {
        "First"
    }
    fn documentation(&self) -> &str {
        "Returns the first item of the input collection. A non-collection input is returned unchanged."
    }

    fn evaluate(&self, context: &PathValue) -> PathValue {
        match context {
            PathValue::Collection(items) => match items.first() {
                Some(value) => PathValue::from_json(value.clone()),
                None => context.clone(),
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Collection;
    use serde_json::json;

    #[test]
    fn takes_the_first_element() {
        let input = PathValue::Collection(Collection::from_vec(vec![json!(1), json!(2)]));
        assert_eq!(FirstFunction.evaluate(&input), PathValue::Single(json!(1)));
    }

    #[test]
    fn passes_non_collections_through() {
        let input = PathValue::Single(json!("x"));
        assert_eq!(FirstFunction.evaluate(&input), input);
        assert_eq!(FirstFunction.evaluate(&PathValue::Empty), PathValue::Empty);
    }

    #[test]
    fn empty_collections_pass_through_unchanged() {
        let input = PathValue::Collection(Collection::new());
        assert_eq!(FirstFunction.evaluate(&input), input);
    }
}
