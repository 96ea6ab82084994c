//! Static catalog of example path expressions
//!
//! A read-only, versioned list of example expressions consumed by display
//! surfaces for browsing and demos. The catalog is injected configuration
//! for the engine's consumers; evaluation semantics never read it.

use serde::{Deserialize, Serialize};

/// One example expression for browsing and demo purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathExample {
    /// The path expression itself
    pub path: String,
    /// What the expression demonstrates
    pub description: String,
    /// Browsing category
    pub category: String,
    /// Resource type the expression is meant to run against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Immutable, versioned collection of example expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleCatalog {
    /// Catalog format version
    pub version: String,
    /// The examples, in display order
    pub examples: Vec<PathExample>,
}

impl ExampleCatalog {
    /// The built-in example set shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            version: "1".to_string(),
            examples: vec![
                example(
                    "name.family",
                    "All family names across every name entry",
                    "navigation",
                    Some("Patient"),
                ),
                example(
                    "name.given",
                    "All given names, flattened across name entries",
                    "navigation",
                    Some("Patient"),
                ),
                example(
                    "address.city",
                    "City of each listed address",
                    "navigation",
                    Some("Patient"),
                ),
                example(
                    "name[0].family",
                    "Family name of the first name entry",
                    "indexing",
                    Some("Patient"),
                ),
                example(
                    "telecom[1].value",
                    "Value of the second telecom entry",
                    "indexing",
                    Some("Patient"),
                ),
                example(
                    r#"name.where(use = "official").family"#,
                    "Family name of the official name only",
                    "filtering",
                    Some("Patient"),
                ),
                example(
                    r#"telecom.where(system = "phone").value"#,
                    "Phone numbers among the telecom entries",
                    "filtering",
                    Some("Patient"),
                ),
                example(
                    "name.given.count()",
                    "How many given names the patient has in total",
                    "functions",
                    Some("Patient"),
                ),
                example(
                    "identifier.first()",
                    "The first identifier",
                    "functions",
                    Some("Patient"),
                ),
                example(
                    "name.last()",
                    "The last name entry",
                    "functions",
                    Some("Patient"),
                ),
                example(
                    "deceasedBoolean.exists()",
                    "Whether a deceased flag is recorded",
                    "functions",
                    Some("Patient"),
                ),
                example(
                    "component.empty()",
                    "Whether the observation has no components",
                    "functions",
                    Some("Observation"),
                ),
                example(
                    "code.coding.single()",
                    "The sole coding, when exactly one is present",
                    "functions",
                    Some("Observation"),
                ),
            ],
        }
    }

    /// Load a catalog from a JSON string (injected configuration).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Examples belonging to one browsing category, in display order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a PathExample> {
        self.examples
            .iter()
            .filter(move |example| example.category == category)
    }
}

fn example(
    path: &str,
    description: &str,
    category: &str,
    resource_type: Option<&str>,
) -> PathExample {
    PathExample {
        path: path.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        resource_type: resource_type.map(str::to_string),
    }
}
