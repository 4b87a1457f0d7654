//! Example groups shown on the switch's gallery pages.

use tumbler_carton::bag;

use crate::types::{Example, ExampleGroup};

fn group(id: &str, title: &str, examples: Vec<Example>) -> ExampleGroup {
    ExampleGroup {
        id: id.to_string(),
        title: title.to_string(),
        component: "switch".to_string(),
        examples,
    }
}

fn basic() -> Vec<Example> {
    vec![
        Example::new(
            "Basic Toggle",
            bag! { "label" => "Enable notifications", "value" => false },
        )
        .with_description("Simple on/off switch"),
        Example::new("Pre-checked", bag! { "label" => "Dark mode", "value" => true })
            .with_description("Switch that starts enabled"),
        Example::new(
            "Disabled",
            bag! { "label" => "Disabled option", "value" => false, "disabled" => true },
        )
        .with_description("Disabled switch"),
        Example::new(
            "Loading",
            bag! { "label" => "Processing...", "value" => true, "loading" => true },
        )
        .with_description("Switch in loading state"),
    ]
}

fn designs() -> Vec<Example> {
    vec![
        Example::new(
            "Slider (iOS)",
            bag! { "design" => "slider", "label" => "iOS Style", "colorScheme" => "blue" },
        )
        .with_description("Classic iOS-style slider"),
        Example::new(
            "Inner Text",
            bag! { "design" => "inner", "label" => "Power", "colorScheme" => "green" },
        )
        .with_description("Switch with visible ON/OFF text"),
        Example::new(
            "Modern",
            bag! {
                "design" => "modern",
                "label" => "Modern Switch",
                "showIcons" => true,
                "colorScheme" => "purple",
            },
        )
        .with_description("Modern design with track icons"),
        Example::new(
            "Material Design",
            bag! { "design" => "material", "label" => "Material", "colorScheme" => "orange" },
        )
        .with_description("Google Material Design style"),
        Example::new(
            "Multi-Option",
            bag! {
                "design" => "multi",
                "label" => "View Mode",
                "options" => vec!["List", "Grid", "Compact"],
                "value" => "List",
            },
        )
        .with_description("Segmented control with multiple options"),
    ]
}

fn colors() -> Vec<Example> {
    [
        ("Blue", "blue"),
        ("Green", "green"),
        ("Red", "red"),
        ("Purple", "purple"),
        ("Orange", "orange"),
        ("Pink", "pink"),
    ]
    .into_iter()
    .map(|(name, scheme)| {
        Example::new(
            name,
            bag! { "colorScheme" => scheme, "label" => format!("{} theme", name) },
        )
    })
    .collect()
}

fn sizes() -> Vec<Example> {
    [
        ("Extra Small", "xs", "XS"),
        ("Small", "sm", "Small"),
        ("Medium", "md", "Medium"),
        ("Large", "lg", "Large"),
        ("Extra Large", "xl", "XL"),
    ]
    .into_iter()
    .map(|(name, size, label)| Example::new(name, bag! { "size" => size, "label" => label }))
    .collect()
}

fn customization() -> Vec<Example> {
    vec![
        Example::new(
            "With Shadow",
            bag! { "shadow" => true, "colorScheme" => "blue", "label" => "Shadow effect" },
        )
        .with_description("Switch with shadow effect"),
        Example::new(
            "With Outline",
            bag! { "outline" => true, "colorScheme" => "purple", "label" => "With outline" },
        )
        .with_description("Switch with border outline"),
        Example::new(
            "Sharp Corners",
            bag! { "rounded" => false, "colorScheme" => "red", "label" => "Sharp corners" },
        )
        .with_description("Non-rounded switch"),
        Example::new(
            "Left Label",
            bag! { "labelPosition" => "left", "label" => "Left label", "colorScheme" => "green" },
        )
        .with_description("Label on the left side"),
        Example::new(
            "Custom Icons",
            bag! {
                "showIcons" => true,
                "onIcon" => "🌙",
                "offIcon" => "☀️",
                "label" => "Day/Night mode",
                "colorScheme" => "purple",
            },
        )
        .with_description("Custom on/off icons"),
        Example::new(
            "Slow Animation",
            bag! {
                "animationDuration" => 800,
                "animationEasing" => "ease-in-out",
                "label" => "Slow transition",
                "colorScheme" => "orange",
            },
        )
        .with_description("Extended animation duration"),
    ]
}

/// All gallery groups, in page order.
pub fn example_groups() -> Vec<ExampleGroup> {
    vec![
        group("basic", "Basic Usage", basic()),
        group("designs", "Design Variants", designs()),
        group("colors", "Color Schemes", colors()),
        group("sizes", "Sizes", sizes()),
        group("customization", "Customization", customization()),
    ]
}
