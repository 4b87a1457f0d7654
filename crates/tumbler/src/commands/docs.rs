//! Docs command - generate Markdown documentation for a component

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tumbler_carton::format::format_bytes;
use tumbler_palette::docs::{generate_component_doc, DocOptions, DocOutput};

use super::CliError;

#[derive(Args)]
pub struct DocsArgs {
    /// Component identifier (e.g. "switch")
    pub id: String,

    /// Write to this file (or into this directory) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Custom page title
    #[arg(long)]
    pub title: Option<String>,

    /// Leave out the curated examples
    #[arg(long)]
    pub no_examples: bool,
}

pub fn run(args: DocsArgs) -> Result<(), CliError> {
    let descriptor = tumbler_palette::get_descriptor(&args.id)?;
    let options = DocOptions {
        include_examples: !args.no_examples,
        title: args.title,
        ..Default::default()
    };
    let doc = generate_component_doc(descriptor, &options);

    let Some(output) = args.output else {
        print!("{}", doc.markdown);
        return Ok(());
    };

    let path = if output.is_dir() {
        output.join(&doc.filename)
    } else {
        output
    };
    fs::write(&path, &doc.markdown).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;

    eprintln!("{}", written_summary(&path, &doc));
    Ok(())
}

fn written_summary(path: &Path, doc: &DocOutput) -> String {
    format!(
        "Wrote {} ({}, {} properties, {} examples)",
        path.display(),
        format_bytes(doc.markdown.len() as u64, 1),
        doc.property_count,
        doc.example_count
    )
}
