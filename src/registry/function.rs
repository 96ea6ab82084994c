//! Cardinality function trait and registry

use crate::model::PathValue;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Function dispatch errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// A call segment named a function outside the registry. This fails the
    /// entire evaluation rather than resolving to absence.
    #[error("unsupported function: {name}")]
    UnsupportedFunction {
        /// The name that was called
        name: String,
    },
}

/// A zero-argument builtin that reasons about the size or shape of the
/// current collection rather than navigating into it.
///
/// Implementations are total over every context shape, including absence:
/// `count` reports `0` for an absent context, `empty` reports `true`, and so
/// on. They are pure and hold no state, so a registry of them is safe to
/// share across concurrent evaluations.
pub trait CardinalityFunction: Send + Sync {
    /// Name the function is registered under
    fn name(&self) -> &str;

    /// Human-friendly name for display surfaces
    fn human_friendly_name(&self) -> &str;

    /// Function documentation
    fn documentation(&self) -> &str;

    /// Apply the function to the current context
    fn evaluate(&self, context: &PathValue) -> PathValue;
}

impl std::fmt::Debug for dyn CardinalityFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardinalityFunction")
            .field("name", &self.name())
            .finish()
    }
}

/// Registry mapping function names to cardinality builtins.
///
/// Built once at engine construction and never mutated afterwards; shared
/// read-only across arbitrarily many concurrent evaluations.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn CardinalityFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }

    /// Register a function under its own name
    pub fn register<F: CardinalityFunction + 'static>(&mut self, function: F) {
        self.functions
            .insert(function.name().to_string(), Arc::new(function));
    }

    /// Look up a function by name; an unknown name is a hard failure.
    pub fn lookup(&self, name: &str) -> FunctionResult<Arc<dyn CardinalityFunction>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| FunctionError::UnsupportedFunction {
                name: name.to_string(),
            })
    }

    /// Whether a function is registered under the given name
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names, sorted for stable display
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_standard_registry;

    #[test]
    fn unknown_names_are_hard_failures() {
        let registry = create_standard_registry();
        let err = registry.lookup("bogus").unwrap_err();
        assert_eq!(
            err,
            FunctionError::UnsupportedFunction {
                name: "bogus".into()
            }
        );
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn standard_registry_holds_the_six_builtins() {
        let registry = create_standard_registry();
        assert_eq!(
            registry.names(),
            vec!["count", "empty", "exists", "first", "last", "single"]
        );
    }
}
