//! # tumbler
//!
//! Tumbler - Prop schemas and usage snippets for the svelte-toggle-switch
//! playground.
//!
//! ## Name Origin
//!
//! A **tumbler** is the switch you flip on a wall: two positions, one
//! click. This binary is the command-line face of the playground built
//! around such a switch, listing what it can be configured with and
//! printing the code for any configuration.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tumbler")]
#[command(about = "Prop schemas and usage snippets for svelte-toggle-switch", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (defaults to ./tumbler.config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered components and example groups
    List(commands::list::ListArgs),

    /// Describe a component's properties
    Show(commands::show::ShowArgs),

    /// Print usage code for a component
    Snippet(commands::snippet::SnippetArgs),

    /// Print the TypeScript props interface of a component
    Types(commands::types::TypesArgs),

    /// Generate Markdown documentation for a component
    Docs(commands::docs::DocsArgs),

    /// Check every catalog entry against its own schema
    Validate(commands::validate::ValidateArgs),

    /// Show or change the preview background theme
    Theme(commands::theme::ThemeArgs),

    /// Print the JSON Schema of tumbler.config.json
    Schema(commands::schema::SchemaArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref());

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Snippet(args) => commands::snippet::run(args, &config),
        Commands::Types(args) => commands::types::run(args),
        Commands::Docs(args) => commands::docs::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Theme(args) => commands::theme::run(args, &config),
        Commands::Schema(args) => commands::schema::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
