//! Insertion-ordered property bags.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::PropValue;

/// An ordered association of property names to values.
///
/// Iteration order is insertion order. Inserting a key that is already
/// present replaces its value without moving it, the same way assigning to
/// an existing key of an object literal does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: Vec<(String, PropValue)>,
}

impl PropertyBag {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// String value stored under `key`, if it is a string.
    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// A copy of `self` with every entry of `overlay` applied on top.
    ///
    /// Keys already in `self` keep their position; new keys from the
    /// overlay are appended in the overlay's order.
    pub fn merged_with(&self, overlay: &PropertyBag) -> PropertyBag {
        let mut merged = self.clone();
        for (key, value) in overlay.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl<K: Into<String>, V: Into<PropValue>> Extend<(K, V)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, PropValue);
    type IntoIter = std::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PropertyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct PropertyBagVisitor;

impl<'de> Visitor<'de> for PropertyBagVisitor {
    type Value = PropertyBag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PropertyBag, A::Error> {
        let mut bag = PropertyBag::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, PropValue>()? {
            bag.insert(key, value);
        }
        Ok(bag)
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropertyBagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag;

    #[test]
    fn test_insert_keeps_position_on_replace() {
        let mut props = bag! { "a" => 1, "b" => 2, "c" => 3 };
        let previous = props.insert("b", "two");

        assert_eq!(previous, Some(PropValue::Number(2.0)));
        assert_eq!(props.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(props.get_str("b"), Some("two"));
    }

    #[test]
    fn test_remove() {
        let mut props = bag! { "a" => 1, "b" => 2, "c" => 3 };
        assert_eq!(props.remove("a"), Some(PropValue::Number(1.0)));
        assert_eq!(props.remove("missing"), None);
        assert_eq!(props.keys().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn test_merged_with() {
        let defaults = bag! { "design" => "slider", "size" => "md", "disabled" => false };
        let overlay = bag! { "colorScheme" => "green", "design" => "inner" };
        let merged = defaults.merged_with(&overlay);

        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            ["design", "size", "disabled", "colorScheme"]
        );
        assert_eq!(merged.get_str("design"), Some("inner"));
        // The source bags are untouched.
        assert_eq!(defaults.get_str("design"), Some("slider"));
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let json = r#"{"zeta":true,"alpha":"x","mid":[1,2]}"#;
        let props: PropertyBag = serde_json::from_str(json).unwrap();

        assert_eq!(props.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&props).unwrap(), json);
    }

    #[test]
    fn test_from_iterator() {
        let props: PropertyBag = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(props.len(), 2);
        assert!(props.contains_key("b"));
        assert!(!PropertyBag::new().contains_key("b"));
    }
}
