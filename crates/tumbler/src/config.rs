//! Configuration file loading for tumbler.
//!
//! Reads `tumbler.config.json` from the current working directory, or the
//! file given with `--config`. Also carries the file's JSON Schema for
//! editor autocompletion.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tumbler_sketch::GenerateOptions;
use tumbler_vitrine::Theme;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tumbler.config.json";

/// Top-level tumbler configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TumblerConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Module generated imports read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,

    /// Emit `bind:value` on generated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_binding: Option<bool>,

    /// Theme used while no preference has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl TumblerConfig {
    /// Snippet options with the configured overrides applied.
    pub fn generate_options(&self) -> GenerateOptions {
        let mut options = GenerateOptions::default();
        if let Some(ref module) = self.source_module {
            options = options.with_source_module(module.as_str());
        }
        if let Some(include_binding) = self.include_binding {
            options = options.with_binding(include_binding);
        }
        options
    }
}

/// Load the config from `path`, or from `tumbler.config.json` in the CWD.
///
/// A missing file yields the defaults. An unreadable or malformed file is
/// reported as a warning and also yields the defaults.
pub fn load_config(path: Option<&Path>) -> TumblerConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME),
    };

    if !config_path.exists() {
        if path.is_some() {
            tracing::warn!("config file {} does not exist", config_path.display());
        }
        return TumblerConfig::default();
    }

    match read_config(&config_path) {
        Ok(config) => {
            tracing::debug!("loaded {}", config_path.display());
            config
        }
        Err(message) => {
            tracing::warn!("{}; using defaults", message);
            TumblerConfig::default()
        }
    }
}

fn read_config(path: &Path) -> Result<TumblerConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// JSON Schema for `tumbler.config.json`.
pub const TUMBLER_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Tumbler Configuration",
  "description": "Configuration file for tumbler - prop schemas and usage snippets for svelte-toggle-switch",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "sourceModule": {
      "type": "string",
      "description": "Module that generated import statements read from",
      "default": "svelte-toggle-switch"
    },
    "includeBinding": {
      "type": "boolean",
      "description": "Emit bind:value on generated component tags",
      "default": true
    },
    "theme": {
      "type": "string",
      "description": "Preview background used while no theme preference is saved",
      "enum": ["light", "dark", "gray"],
      "default": "light"
    }
  },
  "additionalProperties": false
}"#;
