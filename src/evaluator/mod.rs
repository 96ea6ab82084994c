//! Segment dispatch and property navigation
//!
//! The evaluator folds classified segments left-to-right over the document,
//! threading a [`PathValue`] context. Navigation over an absent context is
//! identity, which realizes absence short-circuiting while still letting
//! cardinality functions observe absence (`missing.count()` is `0`,
//! `missing.empty()` is `true`).

pub mod error;
pub mod filter;

pub use error::{EvalResult, EvaluationError};

use crate::model::{Collection, PathValue};
use crate::parser::Segment;
use crate::registry::FunctionRegistry;
use serde_json::Value;

/// Apply one classified segment to the current context.
///
/// Property and index segments never fail; they degrade to absence on any
/// mismatch. Call segments fail the whole evaluation when the name is not
/// registered.
pub fn apply_segment(
    segment: &Segment,
    context: PathValue,
    registry: &FunctionRegistry,
) -> EvalResult<PathValue> {
    match segment {
        Segment::Property(name) => Ok(navigate_property(name, &context)),
        Segment::Index { property, index } => Ok(navigate_index(property, *index, &context)),
        Segment::Call { name, .. } => {
            let function = registry.lookup(name)?;
            Ok(function.evaluate(&context))
        }
        Segment::Filter(predicate) => Ok(filter::apply_filter(predicate.as_ref(), context)),
    }
}

/// Resolve a named field against the context.
///
/// A collection context distributes the lookup over every element, flattens
/// array-valued fields exactly one level, and drops elements where the field
/// is absent; the result of collection navigation is always a collection,
/// possibly empty. Scalar and absent contexts resolve to absence.
pub(crate) fn navigate_property(name: &str, context: &PathValue) -> PathValue {
    match context {
        PathValue::Empty => PathValue::Empty,
        PathValue::Single(Value::Object(fields)) => match fields.get(name) {
            Some(value) => PathValue::from_json(value.clone()),
            None => PathValue::Empty,
        },
        PathValue::Single(_) => PathValue::Empty,
        PathValue::Collection(items) => {
            let mut results = Vec::new();
            for item in items.iter() {
                let Value::Object(fields) = item else { continue };
                match fields.get(name) {
                    None | Some(Value::Null) => {}
                    Some(Value::Array(values)) => results.extend(values.iter().cloned()),
                    Some(value) => results.push(value.clone()),
                }
            }
            PathValue::Collection(Collection::from_vec(results))
        }
    }
}

/// Indexed access degrades to absence on any mismatch: a missing property, a
/// non-array value, or an out-of-range index.
fn navigate_index(property: &str, index: usize, context: &PathValue) -> PathValue {
    match navigate_property(property, context) {
        PathValue::Collection(items) => match items.get(index) {
            Some(value) => PathValue::from_json(value.clone()),
            None => PathValue::Empty,
        },
        _ => PathValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn collection_navigation_flattens_one_level_and_drops_absences() {
        let context = PathValue::from_json(json!([{"b": 1}, {}, {"b": [3, 4]}]));
        let result = navigate_property("b", &context);
        assert_eq!(result.into_json(), Some(json!([1, 3, 4])));
    }

    #[test]
    fn navigation_into_scalars_is_absent() {
        let context = PathValue::Single(json!("leaf"));
        assert_eq!(navigate_property("b", &context), PathValue::Empty);
    }

    #[test]
    fn navigation_over_absence_stays_absent() {
        assert_eq!(navigate_property("b", &PathValue::Empty), PathValue::Empty);
    }

    #[test]
    fn null_fields_resolve_to_absence() {
        let context = PathValue::from_json(json!({"a": null}));
        assert_eq!(navigate_property("a", &context), PathValue::Empty);
    }

    #[test]
    fn index_out_of_range_is_absent() {
        let context = PathValue::from_json(json!({"a": [1, 2]}));
        assert_eq!(navigate_index("a", 5, &context), PathValue::Empty);
        assert_eq!(navigate_index("a", 1, &context), PathValue::Single(json!(2)));
    }

    #[test]
    fn index_into_non_arrays_is_absent() {
        let context = PathValue::from_json(json!({"a": "scalar"}));
        assert_eq!(navigate_index("a", 0, &context), PathValue::Empty);
    }
}
