//! The toggle switch.

use tumbler_carton::bag;

use crate::types::{Category, ComponentDescriptor, Example, PropertySchema, SelectOption};

/// Package the switch is published under.
pub const PACKAGE_NAME: &str = "svelte-toggle-switch";

const DESIGNS: [&str; 6] = ["slider", "ios", "inner", "modern", "material", "multi"];

const SIZES: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

const COLOR_SCHEMES: [&str; 10] = [
    "blue", "green", "red", "purple", "orange", "pink", "yellow", "indigo", "teal", "custom",
];

const EASINGS: [&str; 5] = ["ease", "ease-in", "ease-out", "ease-in-out", "linear"];

const ON_ICONS: [(&str, &str); 11] = [
    ("✓ Check", "✓"),
    ("✔️ Check Mark", "✔️"),
    ("👍 Thumbs Up", "👍"),
    ("🌙 Moon", "🌙"),
    ("❤️ Heart", "❤️"),
    ("⭐ Star", "⭐"),
    ("🔥 Fire", "🔥"),
    ("💡 Bulb", "💡"),
    ("🎵 Music", "🎵"),
    ("📧 Mail", "📧"),
    ("Custom", "custom"),
];

const OFF_ICONS: [(&str, &str); 11] = [
    ("✕ X", "✕"),
    ("✖️ X Mark", "✖️"),
    ("👎 Thumbs Down", "👎"),
    ("☀️ Sun", "☀️"),
    ("💔 Broken Heart", "💔"),
    ("⚫ Circle", "⚫"),
    ("❄️ Snowflake", "❄️"),
    ("🔇 Mute", "🔇"),
    ("🎵 Music Off", "🎵"),
    ("📪 Mail Empty", "📪"),
    ("Custom", "custom"),
];

fn labeled(options: &[(&str, &str)]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|(label, value)| SelectOption::labeled(*label, *value))
        .collect()
}

fn properties() -> Vec<PropertySchema> {
    use Category::*;

    vec![
        // Basic
        PropertySchema::select("design", DESIGNS)
            .with_default("slider")
            .with_description("Design variant of the switch"),
        PropertySchema::text("label")
            .with_default("Toggle Switch")
            .with_description("Label text for the switch"),
        PropertySchema::select("labelPosition", ["left", "right"])
            .with_default("right")
            .with_description("Position of the label"),
        PropertySchema::boolean("disabled").with_description("Disable the switch"),
        PropertySchema::boolean("loading").with_description("Show loading spinner"),
        PropertySchema::boolean("readonly").with_description("Make switch read-only"),
        // Styling
        PropertySchema::select("size", SIZES)
            .with_default("md")
            .with_description("Size variant")
            .in_category(Styling),
        PropertySchema::select("colorScheme", COLOR_SCHEMES)
            .with_default("blue")
            .with_description("Color scheme (yellow, indigo and teal added in 2.1)")
            .in_category(Styling),
        PropertySchema::color("color")
            .with_default("#007AFF")
            .with_description("Custom active color (when colorScheme is \"custom\")")
            .in_category(Styling),
        PropertySchema::color("offColor")
            .with_default("#E5E7EB")
            .with_description("Off state color")
            .in_category(Styling),
        PropertySchema::boolean("rounded")
            .with_default(true)
            .with_description("Rounded corners")
            .in_category(Styling),
        PropertySchema::boolean("shadow")
            .with_description("Add shadow effect")
            .in_category(Styling),
        PropertySchema::boolean("outline")
            .with_description("Add outline/border")
            .in_category(Styling),
        // Icons
        PropertySchema::boolean("showIcons")
            .with_description("Show icons on switch")
            .in_category(Icons),
        PropertySchema::select("onIcon", labeled(&ON_ICONS))
            .with_default("✓")
            .with_description("Icon to show when ON")
            .in_category(Icons),
        PropertySchema::select("offIcon", labeled(&OFF_ICONS))
            .with_default("✕")
            .with_description("Icon to show when OFF")
            .in_category(Icons),
        // Animation
        PropertySchema::range("animationDuration", 0.0, 1000.0, 50.0)
            .with_default(300)
            .with_description("Animation duration in milliseconds")
            .in_category(Animation),
        PropertySchema::select("animationEasing", EASINGS)
            .with_default("ease-in-out")
            .with_description("Animation easing function")
            .in_category(Animation),
        // Text labels
        PropertySchema::text("onText")
            .with_default("ON")
            .with_description("Custom text for ON state (inner design)")
            .in_category(Advanced),
        PropertySchema::text("offText")
            .with_default("OFF")
            .with_description("Custom text for OFF state (inner design)")
            .in_category(Advanced),
        // Form validation
        PropertySchema::text("helperText")
            .with_description("Helper text displayed below switch")
            .in_category(Advanced),
        PropertySchema::text("errorText")
            .with_description("Error message (shown when error=true)")
            .in_category(Advanced),
        PropertySchema::boolean("required")
            .with_description("Mark field as required")
            .in_category(Advanced),
        PropertySchema::boolean("error")
            .with_description("Show error state")
            .in_category(Advanced),
        PropertySchema::text("name")
            .with_description("Form field name")
            .in_category(Advanced),
        PropertySchema::number("tabIndex")
            .with_description("Tab index for keyboard navigation")
            .in_category(Advanced),
    ]
}

fn examples() -> Vec<Example> {
    vec![
        Example::new("iOS Style", bag! { "design" => "ios", "colorScheme" => "blue" })
            .with_description("Classic iOS toggle switch"),
        Example::new(
            "Inner Text",
            bag! { "design" => "inner", "colorScheme" => "green" },
        )
        .with_description("Toggle with ON/OFF text"),
        Example::new(
            "Modern",
            bag! { "design" => "modern", "showIcons" => true, "colorScheme" => "purple" },
        )
        .with_description("Modern design with icons"),
        Example::new(
            "Material",
            bag! { "design" => "material", "colorScheme" => "orange" },
        )
        .with_description("Material Design inspired"),
        Example::new(
            "Multi Option",
            bag! {
                "design" => "multi",
                "options" => vec!["Option 1", "Option 2", "Option 3"],
                "value" => "Option 1",
            },
        )
        .with_description("Multiple options as segmented control"),
        Example::new("With Shadow", bag! { "shadow" => true, "colorScheme" => "red" })
            .with_description("Switch with shadow effect"),
        Example::new("Large Size", bag! { "size" => "xl", "colorScheme" => "pink" })
            .with_description("Extra large switch"),
        Example::new(
            "Loading State",
            bag! { "loading" => true, "colorScheme" => "blue" },
        )
        .with_description("Switch in loading state"),
        Example::new("Yellow Theme", bag! { "colorScheme" => "yellow" })
            .with_description("New yellow color scheme"),
        Example::new("Indigo Theme", bag! { "colorScheme" => "indigo" })
            .with_description("New indigo color scheme"),
        Example::new("Teal Theme", bag! { "colorScheme" => "teal" })
            .with_description("New teal color scheme"),
        Example::new(
            "Custom Text",
            bag! {
                "design" => "inner",
                "onText" => "YES",
                "offText" => "NO",
                "colorScheme" => "green",
            },
        )
        .with_description("Custom ON/OFF text"),
        Example::new(
            "With Helper Text",
            bag! {
                "helperText" => "Enable this option to receive notifications",
                "colorScheme" => "blue",
            },
        )
        .with_description("Switch with helper text"),
        Example::new(
            "Error State",
            bag! {
                "error" => true,
                "errorText" => "This field is required",
                "required" => true,
                "outline" => true,
            },
        )
        .with_description("Switch in error state"),
        Example::new(
            "Custom Icons",
            bag! {
                "showIcons" => true,
                "onIcon" => "🌙",
                "offIcon" => "☀️",
                "colorScheme" => "indigo",
                "label" => "Dark Mode",
            },
        )
        .with_description("Day/Night mode toggle"),
    ]
}

/// Catalog entry for the switch.
pub fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        id: "switch".to_string(),
        name: "Switch".to_string(),
        description: "A comprehensive, accessible toggle switch component with 5 design \
                      variants, color themes, and extensive customization options"
            .to_string(),
        properties: properties(),
        defaults: bag! {
            "value" => false,
            "label" => "Toggle Switch",
            "design" => "slider",
            "size" => "md",
            "colorScheme" => "blue",
            "disabled" => false,
            "loading" => false,
            "readonly" => false,
            "showIcons" => false,
            "onIcon" => "✓",
            "offIcon" => "✕",
            "animationDuration" => 300,
            "animationEasing" => "ease-in-out",
            "labelPosition" => "right",
            "rounded" => true,
            "shadow" => false,
            "outline" => false,
            "onText" => "ON",
            "offText" => "OFF",
            "helperText" => "",
            "errorText" => "",
            "required" => false,
            "error" => false,
            "name" => "",
            "tabIndex" => 0,
        },
        examples: examples(),
        import_path: format!("import Switch from '{}';", PACKAGE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Control, ValueType};
    use tumbler_carton::PropValue;

    #[test]
    fn test_switch_validates() {
        assert_eq!(descriptor().validate(), Ok(()));
    }

    #[test]
    fn test_switch_shape() {
        let switch = descriptor();

        assert_eq!(switch.properties.len(), 26);
        assert_eq!(switch.examples.len(), 15);
        assert_eq!(
            switch.categories(),
            vec![
                Category::Basic,
                Category::Styling,
                Category::Icons,
                Category::Animation,
                Category::Advanced,
            ]
        );
        assert_eq!(switch.import_path, "import Switch from 'svelte-toggle-switch';");

        let duration = switch.property("animationDuration").unwrap();
        assert_eq!(duration.value_type, ValueType::Number);
        assert!(matches!(duration.control, Control::Range { step, .. } if step == 50.0));

        let on_icon = switch.property("onIcon").unwrap();
        assert_eq!(on_icon.control.options()[3].label(), "🌙 Moon");
    }

    #[test]
    fn test_example_bag_overlays_defaults() {
        let switch = descriptor();
        let bag = switch.example_bag("Custom Text").unwrap();

        assert_eq!(bag.get_str("design"), Some("inner"));
        assert_eq!(bag.get_str("onText"), Some("YES"));
        assert_eq!(bag.get_str("size"), Some("md"));
        assert_eq!(bag.get("value"), Some(&PropValue::Bool(false)));
        assert_eq!(bag.len(), switch.defaults.len());
    }
}
