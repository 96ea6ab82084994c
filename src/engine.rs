//! Path engine - the main entry point for expression evaluation

use crate::evaluator::{EvaluationError, apply_segment};
use crate::model::{PathValue, TypeTag};
use crate::parser::parse_path;
use crate::registry::{FunctionRegistry, create_standard_registry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Uniform envelope returned by every [`PathEngine::evaluate`] call.
///
/// Failures carry a human-readable `error`; successes carry the resolved
/// `value` and its coarse type. A path that did not resolve is a success
/// with no value and an `undefined` type, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Whether the evaluation ran to completion
    pub success: bool,
    /// The resolved value, absent on failure or when the path did not resolve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Coarse structural type of `value`
    pub result_type: TypeTag,
    /// Human-readable failure message, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationResult {
    fn success(context: PathValue) -> Self {
        let value = context.into_json();
        let result_type = TypeTag::of(value.as_ref());
        Self {
            success: true,
            value,
            result_type,
            error: None,
        }
    }

    fn failure(error: &EvaluationError) -> Self {
        Self {
            success: false,
            value: None,
            result_type: TypeTag::Undefined,
            error: Some(error.to_string()),
        }
    }
}

/// Main engine for evaluating path expressions against JSON documents.
///
/// The engine is stateless and reentrant: the function registry is built
/// once and shared read-only, and each call owns its parsed segments,
/// context chain, and result. Cloning the engine shares the registry.
#[derive(Clone)]
pub struct PathEngine {
    registry: Arc<FunctionRegistry>,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PathEngine {
    /// Create an engine with the standard cardinality function registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(create_standard_registry()),
        }
    }

    /// Create an engine with a caller-supplied registry.
    pub fn with_registry(registry: Arc<FunctionRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this engine dispatches function calls against.
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Evaluate a path expression against a document.
    ///
    /// Never panics and never returns a bare `Err`: every internal failure
    /// is folded into the envelope at this boundary. A `null` document is
    /// rejected before any segment is evaluated.
    pub fn evaluate(&self, path: &str, document: &Value) -> EvaluationResult {
        if document.is_null() {
            return EvaluationResult::failure(&EvaluationError::MissingDocument);
        }

        let segments = parse_path(path);
        log::debug!("evaluating {path:?} ({} segments)", segments.len());

        let mut context = PathValue::from_json(document.clone());
        for segment in &segments {
            context = match apply_segment(segment, context, &self.registry) {
                Ok(next) => next,
                Err(error) => {
                    log::debug!("evaluation of {path:?} failed: {error}");
                    return EvaluationResult::failure(&error);
                }
            };
        }
        EvaluationResult::success(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn null_documents_fail_before_evaluation() {
        let engine = PathEngine::new();
        let result = engine.evaluate("name", &json!(null));
        assert!(!result.success);
        assert_eq!(result.result_type, TypeTag::Undefined);
        assert!(result.error.is_some());
    }

    #[test]
    fn the_root_path_returns_the_document_unchanged() {
        let engine = PathEngine::new();
        let doc = json!({"resourceType": "Patient"});
        for path in ["", "."] {
            let result = engine.evaluate(path, &doc);
            assert!(result.success);
            assert_eq!(result.value, Some(doc.clone()));
            assert_eq!(result.result_type, TypeTag::Object);
        }
    }

    #[test]
    fn envelope_serializes_with_camel_case_field_names() {
        let engine = PathEngine::new();
        let serialized =
            serde_json::to_value(engine.evaluate("a", &json!({"a": "x"}))).unwrap();
        assert_eq!(
            serialized,
            json!({"success": true, "value": "x", "resultType": "string"})
        );
    }
}
