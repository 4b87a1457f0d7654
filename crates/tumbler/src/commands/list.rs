//! List command - registered components and example groups

use clap::Args;
use tumbler_palette::Registry;

use super::CliError;

#[derive(Args)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs) -> Result<(), CliError> {
    let registry = tumbler_palette::registry();

    if args.json {
        println!("{}", render_json(registry)?);
    } else {
        print!("{}", render(registry));
    }
    Ok(())
}

fn render(registry: &Registry) -> String {
    let mut out = String::from("Components:\n");
    for descriptor in registry.iter() {
        out.push_str(&format!(
            "  {:<10} {:<12} {} properties, {} examples\n",
            descriptor.id,
            descriptor.name,
            descriptor.properties.len(),
            descriptor.examples.len()
        ));
    }

    if !registry.example_groups().is_empty() {
        out.push_str("\nExample groups:\n");
        for group in registry.example_groups() {
            out.push_str(&format!(
                "  {:<14} {:<16} {} examples ({})\n",
                group.id,
                group.title,
                group.examples.len(),
                group.component
            ));
        }
    }

    out
}

fn render_json(registry: &Registry) -> Result<String, CliError> {
    let components = registry
        .iter()
        .map(|d| {
            serde_json::json!({
                "id": d.id,
                "name": d.name,
                "properties": d.properties.len(),
                "examples": d.examples.len(),
            })
        })
        .collect::<Vec<_>>();
    let groups = registry
        .example_groups()
        .iter()
        .map(|g| {
            serde_json::json!({
                "id": g.id,
                "title": g.title,
                "component": g.component,
                "examples": g.examples.len(),
            })
        })
        .collect::<Vec<_>>();

    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "components": components,
        "exampleGroups": groups,
    }))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_builtin() {
        insta::assert_snapshot!(render(tumbler_palette::registry()), @r"
Components:
  switch     Switch       26 properties, 15 examples

Example groups:
  basic          Basic Usage      4 examples (switch)
  designs        Design Variants  5 examples (switch)
  colors         Color Schemes    6 examples (switch)
  sizes          Sizes            5 examples (switch)
  customization  Customization    6 examples (switch)
");
    }

    #[test]
    fn test_list_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(tumbler_palette::registry()).unwrap()).unwrap();
        assert_eq!(json["components"][0]["id"], "switch");
        assert_eq!(json["exampleGroups"].as_array().unwrap().len(), 5);
    }
}
