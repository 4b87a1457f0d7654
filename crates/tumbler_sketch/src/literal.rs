//! Standalone value literals.

use tumbler_carton::{js_number, PropValue};

use crate::types::GenerateError;

/// Format a value as it reads in generated source.
///
/// Strings are double-quoted verbatim (embedded quotes are not escaped),
/// numbers and booleans use their canonical form, lists are formatted
/// element by element as `[a, b]`, and objects are pretty-printed JSON.
pub fn format_value_literal(value: &PropValue) -> Result<String, GenerateError> {
    Ok(match value {
        PropValue::String(s) => format!("\"{}\"", s),
        PropValue::Number(n) => js_number(*n),
        PropValue::Bool(b) => b.to_string(),
        PropValue::List(items) => {
            let parts = items
                .iter()
                .map(format_value_literal)
                .collect::<Result<Vec<_>, _>>()?;
            format!("[{}]", parts.join(", "))
        }
        PropValue::Object(_) => serde_json::to_string_pretty(value)?,
        PropValue::Null => "null".to_string(),
    })
}
