//! Show command - describe a component's properties

use clap::Args;
use tumbler_carton::format::{to_title_case, truncate};
use tumbler_palette::ComponentDescriptor;
use tumbler_sketch::format_value_literal;

use super::CliError;

/// Widest description shown in the property table.
const DESCRIPTION_WIDTH: usize = 60;

#[derive(Args)]
pub struct ShowArgs {
    /// Component identifier (e.g. "switch")
    pub id: String,

    /// Print the descriptor as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<(), CliError> {
    let descriptor = tumbler_palette::get_descriptor(&args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(descriptor)?);
    } else {
        print!("{}", render(descriptor)?);
    }
    Ok(())
}

fn render(descriptor: &ComponentDescriptor) -> Result<String, CliError> {
    let mut out = format!("{} ({})\n\n", descriptor.name, descriptor.id);

    if !descriptor.description.is_empty() {
        out.push_str(&descriptor.description);
        out.push_str("\n\n");
    }
    if !descriptor.import_path.is_empty() {
        out.push_str(&descriptor.import_path);
        out.push_str("\n\n");
    }

    for category in descriptor.categories() {
        out.push_str(&to_title_case(category.as_str()));
        out.push('\n');
        for property in descriptor.properties_by_category(category) {
            let default = if property.default_value.is_null() {
                "-".to_string()
            } else {
                format_value_literal(&property.default_value)?
            };
            out.push_str(&format!(
                "  {:<18} {:<22} {:<16} {}\n",
                property.name,
                property.control.to_string(),
                default,
                truncate(&property.description, DESCRIPTION_WIDTH, "...")
            ));
        }
        out.push('\n');
    }

    if !descriptor.examples.is_empty() {
        out.push_str("Examples\n");
        for example in &descriptor.examples {
            match example.description {
                Some(ref description) => {
                    out.push_str(&format!("  {:<18} {}\n", example.name, description))
                }
                None => out.push_str(&format!("  {}\n", example.name)),
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_switch() {
        let out = render(tumbler_palette::get_descriptor("switch").unwrap()).unwrap();

        assert!(out.starts_with("Switch (switch)\n\nA comprehensive"));
        assert!(out.contains("\nimport Switch from 'svelte-toggle-switch';\n"));
        assert!(out.contains("\nBasic\n  design             select (6 options)     \"slider\"         Design variant of the switch\n"));
        assert!(out.contains("  animationDuration  range 0..1000 step 50  300              Animation duration in milliseconds\n"));
        assert!(out.contains("  helperText         text                   \"\"               Helper text displayed below switch\n"));
        assert!(out.contains("\nExamples\n  iOS Style          Classic iOS toggle switch\n"));
    }

    #[test]
    fn test_long_descriptions_truncated() {
        let descriptor = ComponentDescriptor {
            id: "badge".to_string(),
            name: "Badge".to_string(),
            description: String::new(),
            properties: vec![tumbler_palette::PropertySchema::text("tone")
                .with_description("x".repeat(80))],
            defaults: tumbler_carton::PropertyBag::new(),
            examples: Vec::new(),
            import_path: String::new(),
        };
        let out = render(&descriptor).unwrap();

        let line = out.lines().find(|l| l.contains("tone")).unwrap();
        assert!(line.ends_with(&format!("{}...", "x".repeat(57))));
    }

    #[test]
    fn test_show_unknown() {
        let err = tumbler_palette::get_descriptor("button").unwrap_err();
        assert_eq!(CliError::from(err).to_string(), "component 'button' not found");
    }
}
