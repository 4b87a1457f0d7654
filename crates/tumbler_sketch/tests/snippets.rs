//! Snippet generation against the built-in catalog.

use tumbler_carton::{bag, PropertyBag};
use tumbler_palette::get_descriptor;
use tumbler_sketch::{render_full_example, render_snippet, render_tag, GenerateOptions};

fn full(props: &PropertyBag) -> String {
    render_full_example("Switch", props, &GenerateOptions::default()).unwrap()
}

// =============================================================================
// Full examples
// =============================================================================

mod full_example {
    use super::*;

    #[test]
    fn custom_text() {
        let props = bag! {
            "design" => "inner",
            "onText" => "YES",
            "offText" => "NO",
            "colorScheme" => "green",
        };
        insta::assert_snapshot!(full(&props), @r#"
<script>
  import Switch from 'svelte-toggle-switch';

  let value = false;
</script>

<Switch
  bind:value
  design="inner"
  onText="YES"
  offText="NO"
  colorScheme="green"
/>
"#);
    }

    #[test]
    fn multi_option() {
        let switch = get_descriptor("switch").unwrap();
        let props = &switch.example("Multi Option").unwrap().props;
        insta::assert_snapshot!(full(props), @r#"
<script>
  import Switch from 'svelte-toggle-switch';

  let value = 'Option 1';
  let options = [
  "Option 1",
  "Option 2",
  "Option 3"
];
</script>

<Switch
  bind:value
  design="multi"
/>
"#);
    }

    #[test]
    fn numbers_and_booleans() {
        let props = bag! {
            "animationDuration" => 800,
            "shadow" => true,
            "rounded" => false,
        };
        insta::assert_snapshot!(full(&props), @r#"
<script>
  import Switch from 'svelte-toggle-switch';

  let value = false;
</script>

<Switch
  bind:value
  animationDuration={800}
  shadow={true}
  rounded={false}
/>
"#);
    }
}

// =============================================================================
// Tags
// =============================================================================

mod tag {
    use super::*;

    #[test]
    fn switch_defaults() {
        let switch = get_descriptor("switch").unwrap();
        let tag = render_tag("Switch", &switch.defaults, &GenerateOptions::default()).unwrap();
        insta::assert_snapshot!(tag, @r#"
<Switch
  bind:value
  label="Toggle Switch"
  design="slider"
  size="md"
  colorScheme="blue"
  disabled={false}
  loading={false}
  readonly={false}
  showIcons={false}
  onIcon="✓"
  offIcon="✕"
  animationDuration={300}
  animationEasing="ease-in-out"
  labelPosition="right"
  rounded={true}
  shadow={false}
  outline={false}
  onText="ON"
  offText="OFF"
  helperText=""
  errorText=""
  required={false}
  error={false}
  name=""
  tabIndex={0}
/>
"#);
    }

    #[test]
    fn custom_icons_without_binding() {
        let switch = get_descriptor("switch").unwrap();
        let props = &switch.example("Custom Icons").unwrap().props;
        let options = GenerateOptions::default().with_binding(false);
        insta::assert_snapshot!(render_tag("Switch", props, &options).unwrap(), @r#"
<Switch
  showIcons={true}
  onIcon="🌙"
  offIcon="☀️"
  colorScheme="indigo"
  label="Dark Mode"
/>
"#);
    }
}

// =============================================================================
// Catalog coverage
// =============================================================================

#[test]
fn every_catalog_example_renders() {
    let switch = get_descriptor("switch").unwrap();
    let options = GenerateOptions::default();

    for example in &switch.examples {
        let props = switch.example_bag(&example.name).unwrap();
        let snippet = render_snippet(&switch.name, &props, &options).unwrap();

        assert!(snippet.full.starts_with("<script>\n  import Switch from 'svelte-toggle-switch';\n\n  let value = "), "{}", example.name);
        assert!(snippet.full.ends_with(&snippet.tag), "{}", example.name);
        assert!(snippet.tag.starts_with("<Switch\n  bind:value\n"), "{}", example.name);
        assert!(!snippet.tag.contains("\n  value="), "{}", example.name);
    }
}

#[test]
fn every_gallery_example_renders() {
    let registry = tumbler_palette::registry();
    let options = GenerateOptions::default().with_binding(false);

    for group in registry.example_groups() {
        let component = registry.get_descriptor(&group.component).unwrap();
        for example in &group.examples {
            let tag = render_tag(&component.name, &example.props, &options).unwrap();
            assert!(tag.starts_with("<Switch\n"), "{}/{}", group.id, example.name);
            assert!(tag.ends_with("\n/>"), "{}/{}", group.id, example.name);
        }
    }
}

#[test]
fn multi_with_defaults_drops_options_attribute() {
    let switch = get_descriptor("switch").unwrap();
    let props = switch.example_bag("Multi Option").unwrap();
    let code = full(&props);

    assert!(code.contains("  let value = 'Option 1';\n"));
    assert!(!code.contains("options={"));
    assert!(code.contains("  design=\"multi\"\n"));
}
