//! Function registry for the path engine
//!
//! A trait-based registry of the built-in cardinality functions. The
//! registry is a closed, read-only table built once at engine construction;
//! calling an unregistered name fails the whole evaluation.

pub mod function;
pub mod functions;

pub use function::{CardinalityFunction, FunctionError, FunctionRegistry, FunctionResult};

/// Create the standard registry with all built-in cardinality functions.
pub fn create_standard_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    functions::collection::register_collection_functions(&mut registry);
    registry
}
