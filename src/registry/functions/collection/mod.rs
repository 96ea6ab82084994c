//! Collection cardinality functions

pub mod count;
pub mod empty;
pub mod exists;
pub mod first;
pub mod last;
pub mod single;

pub use count::CountFunction;
pub use empty::EmptyFunction;
pub use exists::ExistsFunction;
pub use first::FirstFunction;
pub use last::LastFunction;
pub use single::SingleFunction;

use crate::registry::function::FunctionRegistry;

/// Register all collection cardinality functions
pub fn register_collection_functions(registry: &mut FunctionRegistry) {
    registry.register(FirstFunction);
    registry.register(LastFunction);
    registry.register(CountFunction);
    registry.register(EmptyFunction);
    registry.register(ExistsFunction);
    registry.register(SingleFunction);
}
