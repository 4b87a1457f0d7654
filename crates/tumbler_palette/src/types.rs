//! Schema type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use tumbler_carton::{js_number, PropKind, PropValue, PropertyBag};

/// Runtime type a property's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ValueType {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether `value` has this runtime type. `Null` matches nothing.
    #[inline]
    pub fn matches(self, value: &PropValue) -> bool {
        matches!(
            (self, value.kind()),
            (Self::String, PropKind::String)
                | (Self::Number, PropKind::Number)
                | (Self::Boolean, PropKind::Bool)
                | (Self::Array, PropKind::List)
                | (Self::Object, PropKind::Object)
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping of properties in the editor. Has no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Styling,
    Icons,
    Animation,
    Advanced,
    Behavior,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Self::Basic,
        Self::Styling,
        Self::Icons,
        Self::Animation,
        Self::Advanced,
        Self::Behavior,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Styling => "styling",
            Self::Icons => "icons",
            Self::Animation => "animation",
            Self::Advanced => "advanced",
            Self::Behavior => "behavior",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOption {
    /// Option with a display label distinct from its value.
    Labeled { label: String, value: PropValue },
    /// Option whose value doubles as its label.
    Raw(PropValue),
}

impl SelectOption {
    #[inline]
    pub fn labeled(label: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self::Labeled {
            label: label.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> &PropValue {
        match self {
            Self::Labeled { value, .. } | Self::Raw(value) => value,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Labeled { label, .. } => label.clone(),
            Self::Raw(value) => value.to_string(),
        }
    }
}

impl From<&str> for SelectOption {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Raw(value.into())
    }
}

impl From<PropValue> for SelectOption {
    #[inline]
    fn from(value: PropValue) -> Self {
        Self::Raw(value)
    }
}

/// How an editor should present a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Control {
    /// Free text input.
    Text,
    /// Numeric input with optional bounds.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    /// Slider.
    Range { min: f64, max: f64, step: f64 },
    /// Toggle/checkbox.
    Boolean,
    /// Color picker.
    Color,
    /// Dropdown over a fixed, ordered set of options.
    Select { options: Vec<SelectOption> },
    /// List editor.
    Array,
}

impl Control {
    /// Control type name as used by the editor.
    #[inline]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number { .. } => "number",
            Self::Range { .. } => "range",
            Self::Boolean => "boolean",
            Self::Color => "color",
            Self::Select { .. } => "select",
            Self::Array => "array",
        }
    }

    /// Inclusive numeric bounds, when the control declares any.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Number { min, max, .. } => (*min, *max),
            Self::Range { min, max, .. } => (Some(*min), Some(*max)),
            _ => (None, None),
        }
    }

    #[inline]
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Select { options } => options,
            _ => &[],
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { min, max, step } => write!(
                f,
                "range {}..{} step {}",
                js_number(*min),
                js_number(*max),
                js_number(*step)
            ),
            Self::Number {
                min: Some(min),
                max: Some(max),
                ..
            } => write!(f, "number {}..{}", js_number(*min), js_number(*max)),
            Self::Select { options } => write!(f, "select ({} options)", options.len()),
            other => f.write_str(other.kind_name()),
        }
    }
}

/// Declarative description of one configurable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    /// Property name, unique within a descriptor.
    pub name: String,
    /// Runtime type of the value.
    pub value_type: ValueType,
    /// Editor control.
    pub control: Control,
    /// Human-readable description.
    pub description: String,
    /// Value used when the property is not set.
    pub default_value: PropValue,
    /// Editor grouping.
    pub category: Category,
}

impl PropertySchema {
    fn new(
        name: impl Into<String>,
        value_type: ValueType,
        control: Control,
        default_value: PropValue,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            control,
            description: String::new(),
            default_value,
            category: Category::Basic,
        }
    }

    /// Create a new text property (defaults to the empty string).
    #[inline]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::String, Control::Text, "".into())
    }

    /// Create a new unbounded number property (defaults to `0`).
    #[inline]
    pub fn number(name: impl Into<String>) -> Self {
        let control = Control::Number {
            min: None,
            max: None,
            step: None,
        };
        Self::new(name, ValueType::Number, control, 0.into())
    }

    /// Create a new range property (defaults to `min`).
    #[inline]
    pub fn range(name: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        let control = Control::Range { min, max, step };
        Self::new(name, ValueType::Number, control, min.into())
    }

    /// Create a new boolean property (defaults to `false`).
    #[inline]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Boolean, Control::Boolean, false.into())
    }

    /// Create a new color property (defaults to black).
    #[inline]
    pub fn color(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::String, Control::Color, "#000000".into())
    }

    /// Create a new select property over string options.
    ///
    /// Defaults to the first option's value.
    pub fn select<O: Into<SelectOption>>(
        name: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        let options: Vec<SelectOption> = options.into_iter().map(Into::into).collect();
        let default_value = options
            .first()
            .map(|opt| opt.value().clone())
            .unwrap_or_default();
        Self::new(
            name,
            ValueType::String,
            Control::Select { options },
            default_value,
        )
    }

    /// Create a new list property (defaults to an empty list).
    #[inline]
    pub fn array(name: impl Into<String>) -> Self {
        Self::new(
            name,
            ValueType::Array,
            Control::Array,
            PropValue::List(Vec::new()),
        )
    }

    /// Set default value.
    #[inline]
    pub fn with_default(mut self, value: impl Into<PropValue>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set description.
    #[inline]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set category.
    #[inline]
    pub fn in_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Override the value type chosen by the constructor.
    #[inline]
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

/// A named, curated configuration of the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub props: PropertyBag,
    /// Pre-rendered snippet shown instead of generated code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Example {
    #[inline]
    pub fn new(name: impl Into<String>, props: PropertyBag) -> Self {
        Self {
            name: name.into(),
            description: None,
            props,
            code: None,
        }
    }

    #[inline]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// A themed collection of examples shown together in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleGroup {
    /// Group identifier (e.g. `"sizes"`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Identifier of the component the examples configure.
    pub component: String,
    pub examples: Vec<Example>,
}

/// The full catalog entry for one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Registry identifier (e.g. `"switch"`).
    pub id: String,
    /// Display name, also the tag name in generated code.
    pub name: String,
    pub description: String,
    /// Configurable properties, in editor order.
    pub properties: Vec<PropertySchema>,
    /// Initial property values of the playground.
    pub defaults: PropertyBag,
    /// Curated configurations.
    pub examples: Vec<Example>,
    /// Import line shown to users.
    pub import_path: String,
}

impl ComponentDescriptor {
    /// Look up a property schema by name.
    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Properties of one category, in declaration order.
    pub fn properties_by_category(&self, category: Category) -> Vec<&PropertySchema> {
        self.properties
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Categories in use, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for property in &self.properties {
            if !categories.contains(&property.category) {
                categories.push(property.category);
            }
        }
        categories
    }

    #[inline]
    pub fn example(&self, name: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.name == name)
    }

    /// Defaults overlaid with an example's props.
    pub fn example_bag(&self, name: &str) -> Option<PropertyBag> {
        self.example(name)
            .map(|example| self.defaults.merged_with(&example.props))
    }
}
