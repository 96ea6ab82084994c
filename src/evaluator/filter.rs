//! Filter sub-evaluation for `where(...)` segments

use crate::model::{Collection, PathValue};
use crate::parser::{FilterPredicate, split_segments};
use serde_json::Value;

use super::navigate_property;

/// Apply a `where(...)` filter to the current context.
///
/// The filter retains the candidates whose navigated condition subpath
/// equals the expected string literal. A condition that did not parse makes
/// the filter a no-op, keeping partially-typed expressions usable in an
/// interactive tool. A present single value is treated as a singleton
/// candidate list; absence stays absent.
pub fn apply_filter(predicate: Option<&FilterPredicate>, context: PathValue) -> PathValue {
    let Some(predicate) = predicate else {
        return context;
    };
    match context {
        PathValue::Empty => PathValue::Empty,
        PathValue::Single(value) => {
            if matches(predicate, &value) {
                PathValue::Single(value)
            } else {
                PathValue::Collection(Collection::new())
            }
        }
        PathValue::Collection(items) => {
            let retained: Vec<Value> = items
                .into_iter()
                .filter(|item| matches(predicate, item))
                .collect();
            PathValue::Collection(Collection::from_vec(retained))
        }
    }
}

/// Navigate the condition subpath against one candidate element and compare
/// the outcome to the expected literal. A single string compares directly; a
/// collection matches on membership.
fn matches(predicate: &FilterPredicate, candidate: &Value) -> bool {
    let mut context = PathValue::from_json(candidate.clone());
    for name in split_segments(&predicate.condition_path) {
        context = navigate_property(&name, &context);
    }
    match context {
        PathValue::Single(Value::String(actual)) => actual == predicate.expected_literal,
        PathValue::Collection(items) => items
            .iter()
            .any(|value| value.as_str() == Some(predicate.expected_literal.as_str())),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn names() -> PathValue {
        PathValue::from_json(json!([
            {"use": "official", "family": "Johnson"},
            {"use": "nickname", "given": ["Sally"]}
        ]))
    }

    #[test]
    fn retains_matching_elements() {
        let predicate = FilterPredicate::parse(r#"use = "official""#);
        let filtered = apply_filter(predicate.as_ref(), names());
        assert_eq!(
            filtered.into_json(),
            Some(json!([{"use": "official", "family": "Johnson"}]))
        );
    }

    #[test]
    fn missing_condition_is_a_no_op() {
        let filtered = apply_filter(None, names());
        assert_eq!(filtered, names());
    }

    #[test]
    fn no_match_yields_an_empty_collection() {
        let predicate = FilterPredicate::parse(r#"use = "maiden""#);
        let filtered = apply_filter(predicate.as_ref(), names());
        assert_eq!(filtered.into_json(), Some(json!([])));
    }

    #[test]
    fn condition_subpaths_may_be_dotted() {
        let contacts = PathValue::from_json(json!([
            {"name": {"family": "Chalmers"}},
            {"name": {"family": "Levin"}}
        ]));
        let predicate = FilterPredicate::parse(r#"name.family = "Levin""#);
        let filtered = apply_filter(predicate.as_ref(), contacts);
        assert_eq!(
            filtered.into_json(),
            Some(json!([{"name": {"family": "Levin"}}]))
        );
    }

    #[test]
    fn collection_valued_conditions_match_on_membership() {
        let predicate = FilterPredicate::parse(r#"given = "Sally""#);
        let filtered = apply_filter(predicate.as_ref(), names());
        assert_eq!(
            filtered.into_json(),
            Some(json!([{"use": "nickname", "given": ["Sally"]}]))
        );
    }

    #[test]
    fn filtering_absence_stays_absent() {
        let predicate = FilterPredicate::parse(r#"use = "official""#);
        assert_eq!(
            apply_filter(predicate.as_ref(), PathValue::Empty),
            PathValue::Empty
        );
    }
}
