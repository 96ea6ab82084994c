//! Path-expression parsing
//!
//! Parsing is two small passes: a nesting-aware splitter that cuts the raw
//! string at top-level dots, and a classifier that tags each substring as a
//! property, call, index, or filter segment. Parsing never fails; shapes the
//! grammar does not recognize degrade to property segments whose lookup
//! resolves to absence.

pub mod segment;
pub mod splitter;

pub use segment::{FilterPredicate, Segment};
pub use splitter::split_segments;

/// Split and classify a full path expression into ordered segments.
pub fn parse_path(path: &str) -> Vec<Segment> {
    split_segments(path)
        .iter()
        .map(|raw| Segment::classify(raw))
        .collect()
}
