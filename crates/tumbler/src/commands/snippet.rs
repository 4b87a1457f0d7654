//! Snippet command - print usage code for a component

use clap::Args;
use tumbler_carton::PropertyBag;
use tumbler_palette::{parse_literal, ComponentDescriptor};
use tumbler_sketch::{render_full_example, render_snippet, render_tag, GenerateOptions};

use super::CliError;
use crate::config::TumblerConfig;

#[derive(Args, Default)]
pub struct SnippetArgs {
    /// Component identifier (e.g. "switch")
    pub id: String,

    /// Start from a curated example
    #[arg(short, long)]
    pub example: Option<String>,

    /// Set a property (repeatable), e.g. --prop size=lg
    #[arg(short, long = "prop", value_name = "KEY=VALUE")]
    pub props: Vec<String>,

    /// Start from the component defaults
    #[arg(long)]
    pub with_defaults: bool,

    /// Omit the bind:value directive
    #[arg(long)]
    pub no_binding: bool,

    /// Print a complete component with its script block
    #[arg(long)]
    pub full: bool,

    /// Print import, tag and full example as JSON
    #[arg(long, conflicts_with = "full")]
    pub json: bool,
}

pub fn run(args: SnippetArgs, config: &TumblerConfig) -> Result<(), CliError> {
    let descriptor = tumbler_palette::get_descriptor(&args.id)?;
    println!("{}", render(&args, descriptor, config)?);
    Ok(())
}

fn render(
    args: &SnippetArgs,
    descriptor: &ComponentDescriptor,
    config: &TumblerConfig,
) -> Result<String, CliError> {
    let mut options = config.generate_options();
    if args.no_binding {
        options = options.with_binding(false);
    }

    if let Some(code) = pre_rendered(args, descriptor, &options)? {
        tracing::debug!("using pre-rendered code of example");
        return Ok(code.to_string());
    }

    let props = build_props(args, descriptor)?;
    render_props(args, &descriptor.name, &props, &options)
}

/// Code stored with the requested example, when it can be printed as is.
///
/// Any flag or config that changes the output falls back to generation.
fn pre_rendered<'a>(
    args: &SnippetArgs,
    descriptor: &'a ComponentDescriptor,
    options: &GenerateOptions,
) -> Result<Option<&'a str>, CliError> {
    let Some(ref name) = args.example else {
        return Ok(None);
    };
    let example = descriptor
        .example(name)
        .ok_or_else(|| CliError::ExampleNotFound {
            component: descriptor.id.clone(),
            example: name.clone(),
        })?;

    let customized = !args.props.is_empty()
        || args.with_defaults
        || args.json
        || args.full
        || *options != GenerateOptions::default();
    if customized {
        Ok(None)
    } else {
        Ok(example.code.as_deref())
    }
}

fn build_props(
    args: &SnippetArgs,
    descriptor: &ComponentDescriptor,
) -> Result<PropertyBag, CliError> {
    let mut props = if args.with_defaults {
        descriptor.defaults.clone()
    } else {
        PropertyBag::new()
    };

    if let Some(ref name) = args.example {
        if let Some(example) = descriptor.example(name) {
            props = props.merged_with(&example.props);
        }
    }

    for raw in &args.props {
        let (key, value) = raw
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| CliError::PropSyntax(raw.clone()))?;

        let value = match descriptor.property(key) {
            Some(property) => property.parse_value(value)?,
            None => {
                tracing::warn!("'{}' is not a property of {}", key, descriptor.name);
                parse_literal(value)
            }
        };
        props.insert(key, value);
    }

    Ok(props)
}

fn render_props(
    args: &SnippetArgs,
    component_name: &str,
    props: &PropertyBag,
    options: &GenerateOptions,
) -> Result<String, CliError> {
    if args.json {
        let snippet = render_snippet(component_name, props, options)?;
        return Ok(serde_json::to_string_pretty(&snippet)?);
    }
    if args.full {
        return Ok(render_full_example(component_name, props, options)?);
    }
    Ok(render_tag(component_name, props, options)?)
}
