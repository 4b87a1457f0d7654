//! Types command - print the TypeScript props interface of a component

use clap::Args;
use tumbler_palette::generate_typescript_props;

use super::CliError;

#[derive(Args)]
pub struct TypesArgs {
    /// Component identifier (e.g. "switch")
    pub id: String,
}

pub fn run(args: TypesArgs) -> Result<(), CliError> {
    let descriptor = tumbler_palette::get_descriptor(&args.id)?;
    print!("{}", generate_typescript_props(descriptor));
    Ok(())
}
