//! Theme command - show or change the preview background theme

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tumbler_vitrine::{JsonFilePreferences, PreferenceStore, Theme, ThemeStore};

use super::CliError;
use crate::config::TumblerConfig;

#[derive(Args)]
pub struct ThemeArgs {
    /// Preference file (defaults to <config dir>/tumbler/preferences.json)
    #[arg(long)]
    pub preferences: Option<PathBuf>,

    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ThemeAction {
    /// Print the current theme and its background color (default)
    Get,

    /// Switch to the given theme
    Set {
        /// light, dark or gray
        theme: Theme,
    },

    /// Light becomes dark, anything else becomes light
    Toggle,
}

pub fn run(args: ThemeArgs, config: &TumblerConfig) -> Result<(), CliError> {
    let path = match args.preferences {
        Some(path) => path,
        None => JsonFilePreferences::default_location().ok_or(CliError::NoPreferenceLocation)?,
    };
    let store = JsonFilePreferences::new(path);
    let fallback = config.theme.unwrap_or_default();

    println!(
        "{}",
        execute(args.action.unwrap_or(ThemeAction::Get), store, fallback)?
    );
    Ok(())
}

fn execute<S: PreferenceStore>(
    action: ThemeAction,
    store: S,
    fallback: Theme,
) -> Result<String, CliError> {
    let mut themes = ThemeStore::load_with_default(store, fallback);

    let theme = match action {
        ThemeAction::Get => themes.theme(),
        ThemeAction::Set { theme } => {
            themes.set(theme)?;
            theme
        }
        ThemeAction::Toggle => themes.toggle()?,
    };

    Ok(format!("{} ({})", theme, theme.background_color()))
}
