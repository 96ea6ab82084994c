// Error types for path evaluation

use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Errors that can occur while folding segments over a document.
///
/// Absence is not an error: a path that does not resolve is a successful
/// evaluation with an undefined result. Errors here are terminal for the
/// whole call and are folded into the result envelope at the engine
/// boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Function dispatch error
    #[error("{0}")]
    Function(#[from] crate::registry::FunctionError),

    /// No document was supplied to evaluate against
    #[error("no document provided to evaluate against")]
    MissingDocument,
}
