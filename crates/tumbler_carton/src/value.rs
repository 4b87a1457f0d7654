//! Property values.
//!
//! A widget property holds one of a small, closed set of shapes. Keeping
//! them in a tagged union lets every consumer dispatch exhaustively instead
//! of probing a dynamic value at runtime.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::PropertyBag;

/// Magnitude from which JavaScript prints integers in exponent form.
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    /// Absent value (`null` / `undefined`).
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    String(String),
    /// Ordered sequence of values.
    List(Vec<PropValue>),
    /// Structured value with ordered keys.
    Object(PropertyBag),
}

/// Shape of a [`PropValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Object,
}

impl PropKind {
    /// Lowercase name used in messages.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PropValue {
    #[inline]
    pub fn kind(&self) -> PropKind {
        match self {
            Self::Null => PropKind::Null,
            Self::Bool(_) => PropKind::Bool,
            Self::Number(_) => PropKind::Number,
            Self::String(_) => PropKind::String,
            Self::List(_) => PropKind::List,
            Self::Object(_) => PropKind::Object,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&PropertyBag> {
        match self {
            Self::Object(bag) => Some(bag),
            _ => None,
        }
    }
}

/// Format a number the way JavaScript's `String(n)` does.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// non-finite values print as `NaN` / `Infinity`, and very large or very
/// small magnitudes switch to exponent notation with an explicit sign.
pub fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    format!("{}", n)
}

impl fmt::Display for PropValue {
    /// JavaScript `String(value)` coercion.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => f.write_str(&js_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Array join renders null holes as empty strings.
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<bool> for PropValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for PropValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<PropertyBag> for PropValue {
    #[inline]
    fn from(bag: PropertyBag) -> Self {
        Self::Object(bag)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            // JSON has no NaN/Infinity; they encode as null like JSON.stringify.
            Self::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            // Integral values print without exponent below 1e21, as in JS.
            Self::Number(n) if n.fract() == 0.0 && n.abs() < PLAIN_INTEGER_LIMIT => {
                if n.abs() < 9.2e18 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_i128(*n as i128)
                }
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(bag) => bag.serialize(serializer),
        }
    }
}

struct PropValueVisitor;

impl<'de> Visitor<'de> for PropValueVisitor {
    type Value = PropValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, null, array or object")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<PropValue, E> {
        Ok(PropValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PropValue, E> {
        Ok(PropValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PropValue, E> {
        Ok(PropValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PropValue, E> {
        Ok(PropValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PropValue, E> {
        Ok(PropValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PropValue, E> {
        Ok(PropValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<PropValue, E> {
        Ok(PropValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<PropValue, E> {
        Ok(PropValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<PropValue, D::Error> {
        PropValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PropValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(PropValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PropValue, A::Error> {
        let mut bag = PropertyBag::new();
        while let Some((key, value)) = map.next_entry::<String, PropValue>()? {
            bag.insert(key, value);
        }
        Ok(PropValue::Object(bag))
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(42.0), "42");
        assert_eq!(js_number(1.5), "1.5");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(300.0), "300");
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_display_coercion() {
        assert_eq!(PropValue::from("Option 1").to_string(), "Option 1");
        assert_eq!(PropValue::from(true).to_string(), "true");
        assert_eq!(PropValue::Null.to_string(), "null");
        assert_eq!(
            PropValue::List(vec![1.into(), PropValue::Null, "x".into()]).to_string(),
            "1,,x"
        );
    }

    #[test]
    fn test_serialize_integral_numbers_without_fraction() {
        let value = PropValue::from(vec![1, 2]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[1,2]");

        let value = PropValue::from(vec![0.5, f64::NAN]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[0.5,null]");
    }

    #[test]
    fn test_serialize_large_integers_like_json_stringify() {
        let value = PropValue::from(vec![1e17, -2e20, 9_007_199_254_740_993.0]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            "[100000000000000000,-200000000000000000000,9007199254740992]"
        );
    }

    #[test]
    fn test_deserialize_keeps_object_order() {
        let value: PropValue = serde_json::from_str(r#"{"z":1,"a":[true,null],"m":"x"}"#).unwrap();
        let bag = value.as_object().unwrap();

        assert_eq!(bag.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(
            bag.get("a"),
            Some(&PropValue::List(vec![PropValue::Bool(true), PropValue::Null]))
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(PropValue::from(None::<&str>), PropValue::Null);
        assert_eq!(PropValue::from(Some(3)), PropValue::Number(3.0));
    }
}
