//! A minimal FHIRPath-dialect expression engine
//!
//! fhirpath-lite evaluates a simplified dialect of FHIRPath against
//! JSON-shaped resources: dotted navigation with collection flattening,
//! indexed access, single-predicate `where(...)` filtering, and a fixed set
//! of cardinality functions (`first`, `last`, `count`, `empty`, `exists`,
//! `single`). Evaluation is synchronous, pure, and never panics; every call
//! returns a uniform result envelope.
//!
//! ```
//! use fhirpath_lite::PathEngine;
//! use serde_json::json;
//!
//! let engine = PathEngine::new();
//! let patient = json!({
//!     "resourceType": "Patient",
//!     "name": [{"use": "official", "family": "Johnson"}]
//! });
//!
//! let result = engine.evaluate("name.family", &patient);
//! assert!(result.success);
//! assert_eq!(result.value, Some(json!(["Johnson"])));
//! ```

pub mod catalog;
pub mod engine;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod registry;

// Re-export main types
pub use catalog::{ExampleCatalog, PathExample};
pub use engine::{EvaluationResult, PathEngine};
pub use evaluator::EvaluationError;
pub use model::{Collection, PathValue, TypeTag};
pub use parser::{FilterPredicate, Segment, parse_path, split_segments};
pub use registry::{CardinalityFunction, FunctionRegistry, create_standard_registry};
