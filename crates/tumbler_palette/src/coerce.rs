//! Textual value coercion.
//!
//! Values typed on a command line or in a text field arrive as strings;
//! the schema decides what they become.

use tumbler_carton::{PropKind, PropValue};

use crate::types::{PropertySchema, ValueType};

/// A raw string that cannot become a value of the expected type.
#[derive(Debug, thiserror::Error)]
pub enum ValueParseError {
    #[error("'{property}' expects true or false, got '{raw}'")]
    NotBoolean { property: String, raw: String },

    #[error("'{property}' expects a number, got '{raw}'")]
    NotNumber { property: String, raw: String },

    #[error("'{property}' expects a JSON {expected}: {source}")]
    Json {
        property: String,
        expected: ValueType,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{property}' expects {expected}, got {found}")]
    WrongShape {
        property: String,
        expected: ValueType,
        found: PropKind,
    },
}

impl PropertySchema {
    /// Coerce `raw` to this property's value type.
    ///
    /// Strings are taken verbatim, booleans accept `true`/`false`, numbers
    /// accept any decimal literal, and arrays/objects are parsed as JSON.
    pub fn parse_value(&self, raw: &str) -> Result<PropValue, ValueParseError> {
        match self.value_type {
            ValueType::String => Ok(PropValue::String(raw.to_string())),
            ValueType::Boolean => match raw.trim() {
                "true" => Ok(PropValue::Bool(true)),
                "false" => Ok(PropValue::Bool(false)),
                _ => Err(ValueParseError::NotBoolean {
                    property: self.name.clone(),
                    raw: raw.to_string(),
                }),
            },
            ValueType::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(PropValue::Number)
                .ok_or_else(|| ValueParseError::NotNumber {
                    property: self.name.clone(),
                    raw: raw.to_string(),
                }),
            ValueType::Array | ValueType::Object => {
                let value: PropValue =
                    serde_json::from_str(raw).map_err(|source| ValueParseError::Json {
                        property: self.name.clone(),
                        expected: self.value_type,
                        source,
                    })?;
                if self.value_type.matches(&value) {
                    Ok(value)
                } else {
                    Err(ValueParseError::WrongShape {
                        property: self.name.clone(),
                        expected: self.value_type,
                        found: value.kind(),
                    })
                }
            }
        }
    }
}

/// Interpret `raw` without a schema.
///
/// JSON literals (`true`, `null`, `42`, `["a"]`, `{"k":1}`, `"quoted"`)
/// are decoded; anything else is kept as a plain string.
pub fn parse_literal(raw: &str) -> PropValue {
    serde_json::from_str(raw).unwrap_or_else(|_| PropValue::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_schema() {
        let label = PropertySchema::text("label");
        assert_eq!(label.parse_value("42").unwrap(), PropValue::from("42"));

        let disabled = PropertySchema::boolean("disabled");
        assert_eq!(disabled.parse_value("true").unwrap(), PropValue::Bool(true));
        assert!(matches!(
            disabled.parse_value("yes"),
            Err(ValueParseError::NotBoolean { .. })
        ));

        let duration = PropertySchema::range("animationDuration", 0.0, 1000.0, 50.0);
        assert_eq!(
            duration.parse_value(" 450 ").unwrap(),
            PropValue::Number(450.0)
        );
        assert!(duration.parse_value("fast").is_err());
        assert!(duration.parse_value("NaN").is_err());
    }

    #[test]
    fn test_parse_json_shapes() {
        let options = PropertySchema::array("options");
        assert_eq!(
            options.parse_value(r#"["A","B"]"#).unwrap(),
            PropValue::from(vec!["A", "B"])
        );

        let err = options.parse_value(r#"{"a":1}"#).unwrap_err();
        assert_eq!(err.to_string(), "'options' expects array, got object");
        assert!(matches!(
            options.parse_value("[1,"),
            Err(ValueParseError::Json { .. })
        ));
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("true"), PropValue::Bool(true));
        assert_eq!(parse_literal("12.5"), PropValue::Number(12.5));
        assert_eq!(parse_literal("null"), PropValue::Null);
        assert_eq!(parse_literal("[1,2]"), PropValue::from(vec![1, 2]));
        assert_eq!(parse_literal("\"quoted\""), PropValue::from("quoted"));
        assert_eq!(parse_literal("green"), PropValue::from("green"));
        assert_eq!(parse_literal("Hello world"), PropValue::from("Hello world"));
    }
}
