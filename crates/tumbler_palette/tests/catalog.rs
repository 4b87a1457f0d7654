//! The built-in catalog seen through the public API.

use tumbler_carton::PropValue;
use tumbler_palette::docs::{generate_component_doc, DocOptions};
use tumbler_palette::{
    generate_typescript_props, get_descriptor, registry, Category, RegistryError,
};

#[test]
fn catalog_validates_cleanly() {
    assert!(registry().validate().is_empty());
    assert_eq!(registry().ids().collect::<Vec<_>>(), vec!["switch"]);
}

#[test]
fn unknown_component_is_not_found() {
    assert_eq!(
        get_descriptor("button").unwrap_err(),
        RegistryError::NotFound {
            id: "button".to_string()
        }
    );
    assert!(get_descriptor("Switch").is_err());
}

#[test]
fn lookups_share_one_catalog() {
    let first = get_descriptor("switch").unwrap();
    let second = get_descriptor("switch").unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn property_lookup_and_categories() {
    let switch = get_descriptor("switch").unwrap();

    let animation = switch
        .properties_by_category(Category::Animation)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(animation, vec!["animationDuration", "animationEasing"]);

    let label = switch.property("label").unwrap();
    assert_eq!(label.default_value, PropValue::from("Toggle Switch"));
    assert!(switch.property("glow").is_none());
}

#[test]
fn every_default_matches_its_schema() {
    let switch = get_descriptor("switch").unwrap();
    for (key, value) in switch.defaults.iter() {
        if let Some(property) = switch.property(key) {
            assert_eq!(property.check(value), Ok(()), "{}", key);
        }
    }
}

#[test]
fn example_groups_target_registered_components() {
    for group in registry().example_groups() {
        assert!(get_descriptor(&group.component).is_ok(), "{}", group.id);
        assert!(!group.examples.is_empty(), "{}", group.id);
    }
    assert_eq!(registry().example_group("sizes").unwrap().title, "Sizes");
}

#[test]
fn switch_typescript_props() {
    let switch = get_descriptor("switch").unwrap();
    insta::assert_snapshot!(generate_typescript_props(switch), @r"
export interface SwitchProps {
  value?: boolean | string;
  design?: 'slider' | 'ios' | 'inner' | 'modern' | 'material' | 'multi';
  label?: string;
  labelPosition?: 'left' | 'right';
  disabled?: boolean;
  loading?: boolean;
  readonly?: boolean;
  size?: 'xs' | 'sm' | 'md' | 'lg' | 'xl';
  colorScheme?: 'blue' | 'green' | 'red' | 'purple' | 'orange' | 'pink' | 'yellow' | 'indigo' | 'teal' | 'custom';
  color?: string;
  offColor?: string;
  rounded?: boolean;
  shadow?: boolean;
  outline?: boolean;
  showIcons?: boolean;
  onIcon?: '✓' | '✔️' | '👍' | '🌙' | '❤️' | '⭐' | '🔥' | '💡' | '🎵' | '📧' | 'custom';
  offIcon?: '✕' | '✖️' | '👎' | '☀️' | '💔' | '⚫' | '❄️' | '🔇' | '🎵' | '📪' | 'custom';
  animationDuration?: number;
  animationEasing?: 'ease' | 'ease-in' | 'ease-out' | 'ease-in-out' | 'linear';
  onText?: string;
  offText?: string;
  helperText?: string;
  errorText?: string;
  required?: boolean;
  error?: boolean;
  name?: string;
  tabIndex?: number;
  options?: string[];
}
");
}

#[test]
fn switch_docs_headings() {
    let switch = get_descriptor("switch").unwrap();
    let doc = generate_component_doc(switch, &DocOptions::default());

    let headings = doc
        .markdown
        .lines()
        .filter(|line| line.starts_with("## ") || line.starts_with("### "))
        .take(7)
        .collect::<Vec<_>>();
    assert_eq!(
        headings,
        vec![
            "## Properties",
            "### Basic",
            "### Styling",
            "### Icons",
            "### Animation",
            "### Advanced",
            "## Examples",
        ]
    );
}
