//! Validate command - check every catalog entry against its own schema

use clap::Args;
use tumbler_carton::format::format_number;
use tumbler_palette::{Registry, SchemaError};

use super::CliError;

#[derive(Args)]
pub struct ValidateArgs {
    /// Print nothing on success
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: ValidateArgs) -> Result<(), CliError> {
    let registry = tumbler_palette::registry();
    let errors = registry.validate();

    if errors.is_empty() {
        if !args.quiet {
            println!("{}", summary(registry));
        }
        return Ok(());
    }

    eprint!("{}", report(&errors));
    Err(CliError::Invalid(errors.len()))
}

fn summary(registry: &Registry) -> String {
    let examples = registry
        .iter()
        .map(|d| d.examples.len())
        .chain(registry.example_groups().iter().map(|g| g.examples.len()))
        .sum::<usize>();

    format!(
        "{} component(s) and {} example(s) valid",
        format_number(registry.len() as f64),
        format_number(examples as f64)
    )
}

fn report(errors: &[SchemaError]) -> String {
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!("{}\n", error));
        for violation in &error.violations {
            out.push_str(&format!("  - {}\n", violation));
        }
    }
    out
}
