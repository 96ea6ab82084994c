//! Value model for path evaluation
//!
//! Documents are plain `serde_json` values; evaluation threads them through
//! the fold as a [`PathValue`] context and tags the final result with a
//! coarse [`TypeTag`].

pub mod types;
pub mod value;

pub use types::TypeTag;
pub use value::{Collection, PathValue};
