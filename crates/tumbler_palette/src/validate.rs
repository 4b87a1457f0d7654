//! Type and shape checks of values against their schema.
//!
//! Generation never consults these checks; they guard the catalog itself
//! and values entered in an editor.

use tumbler_carton::{js_number, keys, FxHashSet, PropKind, PropValue, PropertyBag};

use crate::types::{ComponentDescriptor, Control, Example, PropertySchema, ValueType};

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("'{property}' expects {expected}, got {found}")]
    TypeMismatch {
        property: String,
        expected: ValueType,
        found: PropKind,
    },

    #[error("'{property}' value {value} is not one of its options")]
    NotInOptions { property: String, value: String },

    #[error("'{property}' value {value} is outside {min}..={max}")]
    OutOfRange {
        property: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("'{property}' is declared more than once")]
    DuplicateProperty { property: String },

    #[error("default given for undeclared property '{key}'")]
    OrphanDefault { key: String },

    #[error("unknown property '{key}'")]
    UnknownProperty { key: String },

    #[error("default of {violation}")]
    InvalidDefault { violation: Box<SchemaViolation> },

    #[error("example '{example}': {violation}")]
    InvalidExample {
        example: String,
        violation: Box<SchemaViolation>,
    },
}

/// Every violation found in one descriptor or bag.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} schema violation(s) in '{descriptor}'", violations.len())]
pub struct SchemaError {
    /// Identifier of the descriptor that was checked.
    pub descriptor: String,
    pub violations: Vec<SchemaViolation>,
}

impl PropertySchema {
    /// Check a value against this property's type, options and bounds.
    ///
    /// `Null` means "unset" and always passes.
    pub fn check(&self, value: &PropValue) -> Result<(), SchemaViolation> {
        if value.is_null() {
            return Ok(());
        }

        if !self.value_type.matches(value) {
            return Err(SchemaViolation::TypeMismatch {
                property: self.name.clone(),
                expected: self.value_type,
                found: value.kind(),
            });
        }

        if let Control::Select { options } = &self.control {
            if !options.iter().any(|opt| opt.value() == value) {
                return Err(SchemaViolation::NotInOptions {
                    property: self.name.clone(),
                    value: quote(value),
                });
            }
        }

        if let Some(n) = value.as_f64() {
            let (min, max) = self.control.bounds();
            let below = min.is_some_and(|min| n < min);
            let above = max.is_some_and(|max| n > max);
            if below || above {
                return Err(SchemaViolation::OutOfRange {
                    property: self.name.clone(),
                    value: js_number(n),
                    min: min.map_or_else(|| "-Infinity".to_string(), js_number),
                    max: max.map_or_else(|| "Infinity".to_string(), js_number),
                });
            }
        }

        Ok(())
    }
}

impl ComponentDescriptor {
    /// Check every catalog invariant, collecting all violations.
    ///
    /// - property names are unique
    /// - each default matches its property's type and options
    /// - every default key is declared (the bound `value` is reserved)
    /// - every example only uses declared or reserved keys, with valid values
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut violations = Vec::new();
        let mut seen = FxHashSet::default();

        for property in &self.properties {
            if !seen.insert(property.name.as_str()) {
                violations.push(SchemaViolation::DuplicateProperty {
                    property: property.name.clone(),
                });
            }

            let default_check = if property.default_value.is_null() {
                Err(SchemaViolation::TypeMismatch {
                    property: property.name.clone(),
                    expected: property.value_type,
                    found: PropKind::Null,
                })
            } else {
                property.check(&property.default_value)
            };
            if let Err(violation) = default_check {
                violations.push(SchemaViolation::InvalidDefault {
                    violation: Box::new(violation),
                });
            }
        }

        for (key, value) in self.defaults.iter() {
            if key == keys::VALUE {
                continue;
            }
            match self.property(key) {
                Some(property) => {
                    if let Err(violation) = property.check(value) {
                        violations.push(SchemaViolation::InvalidDefault {
                            violation: Box::new(violation),
                        });
                    }
                }
                None => violations.push(SchemaViolation::OrphanDefault {
                    key: key.to_string(),
                }),
            }
        }

        violations.extend(self.example_violations(&self.examples));

        self.into_result(violations)
    }

    /// Check examples defined outside the descriptor (e.g. gallery groups).
    pub fn validate_examples(&self, examples: &[Example]) -> Result<(), SchemaError> {
        let violations = self.example_violations(examples);
        self.into_result(violations)
    }

    /// Editing-time check of a property bag.
    ///
    /// The bound `value` is always accepted; `options` only when the bag
    /// selects the multi-option design.
    pub fn check_bag(&self, bag: &PropertyBag) -> Result<(), SchemaError> {
        let violations = self.bag_violations(bag);
        self.into_result(violations)
    }

    fn example_violations(&self, examples: &[Example]) -> Vec<SchemaViolation> {
        examples
            .iter()
            .flat_map(|example| {
                self.bag_violations(&example.props)
                    .into_iter()
                    .map(|violation| SchemaViolation::InvalidExample {
                        example: example.name.clone(),
                        violation: Box::new(violation),
                    })
            })
            .collect()
    }

    fn bag_violations(&self, bag: &PropertyBag) -> Vec<SchemaViolation> {
        let multi = keys::is_multi_design(bag);
        let mut violations = Vec::new();

        for (key, value) in bag.iter() {
            if key == keys::VALUE {
                continue;
            }
            if key == keys::OPTIONS && multi {
                if !matches!(value, PropValue::List(_) | PropValue::Null) {
                    violations.push(SchemaViolation::TypeMismatch {
                        property: key.to_string(),
                        expected: ValueType::Array,
                        found: value.kind(),
                    });
                }
                continue;
            }
            match self.property(key) {
                Some(property) => {
                    if let Err(violation) = property.check(value) {
                        violations.push(violation);
                    }
                }
                None => violations.push(SchemaViolation::UnknownProperty {
                    key: key.to_string(),
                }),
            }
        }

        violations
    }

    fn into_result(&self, violations: Vec<SchemaViolation>) -> Result<(), SchemaError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError {
                descriptor: self.id.clone(),
                violations,
            })
        }
    }
}

fn quote(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, SelectOption};
    use tumbler_carton::bag;

    fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor {
            id: "demo".to_string(),
            name: "Demo".to_string(),
            description: "Demo widget".to_string(),
            properties: vec![
                PropertySchema::select("design", ["slider", "multi"]),
                PropertySchema::text("label").with_default("Label"),
                PropertySchema::range("duration", 0.0, 1000.0, 50.0)
                    .with_default(300)
                    .in_category(Category::Animation),
                PropertySchema::boolean("disabled"),
            ],
            defaults: bag! { "value" => false, "design" => "slider", "duration" => 300 },
            examples: vec![Example::new(
                "Multi",
                bag! { "design" => "multi", "options" => vec!["A", "B"], "value" => "A" },
            )],
            import_path: "import Demo from 'demo';".to_string(),
        }
    }

    #[test]
    fn test_valid_descriptor() {
        assert_eq!(descriptor().validate(), Ok(()));
    }

    #[test]
    fn test_check_type_mismatch() {
        let schema = PropertySchema::boolean("disabled");
        assert_eq!(
            schema.check(&"yes".into()),
            Err(SchemaViolation::TypeMismatch {
                property: "disabled".to_string(),
                expected: ValueType::Boolean,
                found: PropKind::String,
            })
        );
        assert_eq!(schema.check(&PropValue::Null), Ok(()));
    }

    #[test]
    fn test_check_select_membership() {
        let schema = PropertySchema::select(
            "onIcon",
            [SelectOption::labeled("✓ Check", "✓"), SelectOption::labeled("Custom", "custom")],
        );
        assert!(schema.check(&"✓".into()).is_ok());

        let err = schema.check(&"★".into()).unwrap_err();
        assert_eq!(err.to_string(), "'onIcon' value \"★\" is not one of its options");
    }

    #[test]
    fn test_check_range_bounds() {
        let schema = PropertySchema::range("duration", 0.0, 1000.0, 50.0);
        assert!(schema.check(&1000.into()).is_ok());

        let err = schema.check(&1200.into()).unwrap_err();
        assert_eq!(err.to_string(), "'duration' value 1200 is outside 0..=1000");
    }

    #[test]
    fn test_orphan_default_and_bad_example() {
        let mut broken = descriptor();
        broken.defaults.insert("ghost", true);
        broken
            .examples
            .push(Example::new("Bad", bag! { "size" => "xl", "duration" => -5 }));
        // `options` outside the multi design is not a declared property.
        broken
            .examples
            .push(Example::new("Options", bag! { "options" => vec!["A"] }));

        let err = broken.validate().unwrap_err();
        assert_eq!(err.descriptor, "demo");
        assert_eq!(err.violations.len(), 4);
        assert!(err.violations.contains(&SchemaViolation::OrphanDefault {
            key: "ghost".to_string()
        }));
        assert!(err
            .violations
            .iter()
            .any(|v| v.to_string() == "example 'Bad': unknown property 'size'"));
        assert!(err
            .violations
            .iter()
            .any(|v| v.to_string() == "example 'Options': unknown property 'options'"));
    }

    #[test]
    fn test_invalid_schema_default() {
        let mut broken = descriptor();
        broken.properties.push(PropertySchema::text("size").with_default(3));
        broken.properties.push(PropertySchema::boolean("disabled"));

        let err = broken.validate().unwrap_err();
        assert_eq!(
            err.violations,
            vec![
                SchemaViolation::InvalidDefault {
                    violation: Box::new(SchemaViolation::TypeMismatch {
                        property: "size".to_string(),
                        expected: ValueType::String,
                        found: PropKind::Number,
                    }),
                },
                SchemaViolation::DuplicateProperty {
                    property: "disabled".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_check_bag() {
        let descriptor = descriptor();
        assert!(descriptor
            .check_bag(&bag! { "value" => true, "label" => "On", "disabled" => PropValue::Null })
            .is_ok());

        let err = descriptor
            .check_bag(&bag! { "design" => "multi", "options" => "A,B" })
            .unwrap_err();
        assert_eq!(
            err.violations,
            vec![SchemaViolation::TypeMismatch {
                property: "options".to_string(),
                expected: ValueType::Array,
                found: PropKind::String,
            }]
        );
    }
}
