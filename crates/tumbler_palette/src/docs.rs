//! Markdown documentation for component descriptors.

use serde::{Deserialize, Serialize};
use tumbler_carton::format::{slugify, to_title_case};
use tumbler_carton::{PropValue, PropertyBag};

use crate::types::{ComponentDescriptor, Example};

/// Options for documentation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocOptions {
    /// Include the import line.
    #[serde(default = "default_true")]
    pub include_import: bool,

    /// Include the curated examples.
    #[serde(default = "default_true")]
    pub include_examples: bool,

    /// Custom page title (defaults to the component name).
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self {
            include_import: true,
            include_examples: true,
            title: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output of documentation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocOutput {
    /// Generated Markdown content.
    pub markdown: String,

    /// Suggested filename for the documentation.
    pub filename: String,

    pub title: String,

    /// Number of properties documented.
    pub property_count: usize,

    /// Number of examples documented.
    pub example_count: usize,
}

/// Generate a Markdown page for a component.
///
/// Creates a page with:
/// - Title, description and import line
/// - One property table per category
/// - Examples with their props
pub fn generate_component_doc(
    descriptor: &ComponentDescriptor,
    options: &DocOptions,
) -> DocOutput {
    let mut md = String::with_capacity(4096);
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| descriptor.name.clone());

    md.push_str("# ");
    md.push_str(&title);
    md.push_str("\n\n");

    if !descriptor.description.is_empty() {
        md.push_str(&descriptor.description);
        md.push_str("\n\n");
    }

    if options.include_import && !descriptor.import_path.is_empty() {
        md.push_str("```svelte\n");
        md.push_str(&descriptor.import_path);
        md.push_str("\n```\n\n");
    }

    md.push_str("## Properties\n\n");
    for category in descriptor.categories() {
        md.push_str("### ");
        md.push_str(&to_title_case(category.as_str()));
        md.push_str("\n\n");
        md.push_str("| Prop | Type | Control | Default | Description |\n");
        md.push_str("|------|------|---------|---------|-------------|\n");
        for property in descriptor.properties_by_category(category) {
            md.push_str(&format!(
                "| `{}` | `{}` | {} | {} | {} |\n",
                property.name,
                property.value_type,
                property.control,
                format_cell_value(&property.default_value),
                escape_cell(&property.description),
            ));
        }
        md.push('\n');
    }

    let example_count = if options.include_examples {
        descriptor.examples.len()
    } else {
        0
    };
    if example_count > 0 {
        md.push_str("## Examples\n\n");
        for example in &descriptor.examples {
            md.push_str(&generate_example_doc(example));
        }
    }

    DocOutput {
        markdown: md,
        filename: format!("{}.md", slugify(&title)),
        title,
        property_count: descriptor.properties.len(),
        example_count,
    }
}

/// Generate Markdown for a single example.
pub fn generate_example_doc(example: &Example) -> String {
    let mut md = String::with_capacity(512);

    md.push_str("### ");
    md.push_str(&example.name);
    md.push_str("\n\n");

    if let Some(ref desc) = example.description {
        md.push_str(desc);
        md.push_str("\n\n");
    }

    if !example.props.is_empty() {
        md.push_str(&props_table(&example.props));
        md.push('\n');
    }

    if let Some(ref code) = example.code {
        md.push_str("```svelte\n");
        md.push_str(code);
        md.push_str("\n```\n\n");
    }

    md
}

fn props_table(props: &PropertyBag) -> String {
    let mut md = String::new();
    md.push_str("| Prop | Value |\n");
    md.push_str("|------|-------|\n");
    for (key, value) in props.iter() {
        md.push_str(&format!("| `{}` | {} |\n", key, format_cell_value(value)));
    }
    md
}

fn format_cell_value(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("`\"{}\"`", escape_cell(s)),
        PropValue::List(_) | PropValue::Object(_) => match serde_json::to_string(value) {
            Ok(json) => format!("`{}`", escape_cell(&json)),
            Err(_) => "`?`".to_string(),
        },
        other => format!("`{}`", other),
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
