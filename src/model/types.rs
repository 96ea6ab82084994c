//! Coarse result typing for the evaluation envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Coarse type tag attached to every evaluation result.
///
/// Classification is purely structural and never fails; anything without a
/// recognized shape (including absence) is tagged `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// JSON string
    String,
    /// JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// No value (the path did not resolve, or the shape is unrecognized)
    Undefined,
}

impl TypeTag {
    /// Classify a final value by structural inspection.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => TypeTag::Undefined,
            Some(Value::Array(_)) => TypeTag::Array,
            Some(Value::Object(_)) => TypeTag::Object,
            Some(Value::String(_)) => TypeTag::String,
            Some(Value::Number(_)) => TypeTag::Number,
            Some(Value::Bool(_)) => TypeTag::Boolean,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Undefined => "undefined",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_each_shape() {
        assert_eq!(TypeTag::of(Some(&json!("x"))), TypeTag::String);
        assert_eq!(TypeTag::of(Some(&json!(3))), TypeTag::Number);
        assert_eq!(TypeTag::of(Some(&json!(true))), TypeTag::Boolean);
        assert_eq!(TypeTag::of(Some(&json!([]))), TypeTag::Array);
        assert_eq!(TypeTag::of(Some(&json!({}))), TypeTag::Object);
        assert_eq!(TypeTag::of(Some(&json!(null))), TypeTag::Undefined);
        assert_eq!(TypeTag::of(None), TypeTag::Undefined);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_value(TypeTag::Undefined).unwrap(), json!("undefined"));
        assert_eq!(TypeTag::Array.to_string(), "array");
    }
}
