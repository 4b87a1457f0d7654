//! Subcommands of the tumbler binary.

pub mod docs;
pub mod list;
pub mod schema;
pub mod show;
pub mod snippet;
pub mod theme;
pub mod types;
pub mod validate;

use std::io;
use std::path::PathBuf;

use tumbler_palette::{RegistryError, ValueParseError};
use tumbler_sketch::GenerateError;
use tumbler_vitrine::PreferenceError;

/// Error type shared by all subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error(transparent)]
    Value(#[from] ValueParseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid --prop '{0}' (expected KEY=VALUE)")]
    PropSyntax(String),

    #[error("component '{component}' has no example named '{example}'")]
    ExampleNotFound { component: String, example: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog validation failed ({0} error(s))")]
    Invalid(usize),

    #[error("no configuration directory available to store preferences")]
    NoPreferenceLocation,
}
