//! Parse-time segment classification
//!
//! Each raw segment substring is classified exactly once into a tagged
//! variant, so dispatch during evaluation is an exhaustive match instead of
//! repeated string probing.

use regex::Regex;
use std::sync::LazyLock;

static FILTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^where\((.*)\)$").unwrap());
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)\((.*)\)$").unwrap());
static INDEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)\[(\d+)\]$").unwrap());
static CONDITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*([\w.]+)\s*=\s*['"](.*)['"]\s*$"#).unwrap());

/// One classified unit of a path expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Plain property navigation
    Property(String),

    /// A call to a registered cardinality function
    Call {
        /// Function name looked up in the registry
        name: String,
        /// Raw argument text between the parentheses
        args: String,
    },

    /// Indexed access into an array-valued property
    Index {
        /// Property resolved before indexing
        property: String,
        /// Zero-based element index
        index: usize,
    },

    /// `where(...)` filter over the collection the preceding segment
    /// produced; `None` when the condition text did not parse, which makes
    /// the filter a no-op
    Filter(Option<FilterPredicate>),
}

impl Segment {
    /// Classify one raw segment substring.
    ///
    /// `where(...)` is matched ahead of generic call dispatch so filtering
    /// applies to the current collection instead of being rejected as an
    /// unknown function. Call and index shapes that do not match the
    /// `name(args)` / `name[index]` patterns fall through to property
    /// navigation, which resolves to absence.
    pub fn classify(raw: &str) -> Segment {
        if let Some(caps) = FILTER_RE.captures(raw) {
            return Segment::Filter(FilterPredicate::parse(&caps[1]));
        }
        if raw.contains('(') {
            if let Some(caps) = CALL_RE.captures(raw) {
                return Segment::Call {
                    name: caps[1].to_string(),
                    args: caps[2].trim().to_string(),
                };
            }
            return Segment::Property(raw.to_string());
        }
        if raw.contains('[') {
            if let Some(caps) = INDEX_RE.captures(raw) {
                if let Ok(index) = caps[2].parse() {
                    return Segment::Index {
                        property: caps[1].to_string(),
                        index,
                    };
                }
            }
            return Segment::Property(raw.to_string());
        }
        Segment::Property(raw.to_string())
    }
}

/// A single equality predicate `subpath = "literal"` used by filter segments.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    /// Dotted subpath navigated against each candidate element
    pub condition_path: String,
    /// String literal the navigated value must equal
    pub expected_literal: String,
}

impl FilterPredicate {
    /// Parse a filter condition. Returns `None` when the text is not a
    /// single equality test, leaving the filter permissive.
    pub fn parse(condition: &str) -> Option<FilterPredicate> {
        let caps = CONDITION_RE.captures(condition)?;
        Some(FilterPredicate {
            condition_path: caps[1].to_string(),
            expected_literal: caps[2].to_string(),
        })
    }
}
