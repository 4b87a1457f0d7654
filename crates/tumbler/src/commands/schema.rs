//! Schema command - print or install the JSON Schema of tumbler.config.json

use std::fs;
use std::path::PathBuf;

use clap::Args;

use super::CliError;
use crate::config::TUMBLER_CONFIG_SCHEMA;

#[derive(Args)]
pub struct SchemaArgs {
    /// Write the schema to node_modules/.tumbler/ under this directory
    #[arg(long, value_name = "DIR")]
    pub write: Option<PathBuf>,
}

pub fn run(args: SchemaArgs) -> Result<(), CliError> {
    let Some(base) = args.write else {
        println!("{}", TUMBLER_CONFIG_SCHEMA);
        return Ok(());
    };

    let path = write_schema(&base)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

/// Write the schema to `node_modules/.tumbler/tumbler.config.schema.json`.
fn write_schema(base: &std::path::Path) -> Result<PathBuf, CliError> {
    let schema_dir = base.join("node_modules/.tumbler");
    let path = schema_dir.join("tumbler.config.schema.json");
    let io_error = |source| CliError::Write {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(&schema_dir).map_err(io_error)?;
    fs::write(&path, TUMBLER_CONFIG_SCHEMA).map_err(io_error)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(dir.path()).unwrap();

        assert!(path.ends_with("node_modules/.tumbler/tumbler.config.schema.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), TUMBLER_CONFIG_SCHEMA);
    }
}
