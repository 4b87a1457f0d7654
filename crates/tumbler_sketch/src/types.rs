//! Type definitions for snippet generation.

use serde::{Deserialize, Serialize};

/// Package imported by generated code unless overridden.
pub const DEFAULT_SOURCE_MODULE: &str = "svelte-toggle-switch";

/// Two-way binding of the widget's bound state.
pub const BINDING_DIRECTIVE: &str = "bind:value";

/// Options for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Emit `bind:value` as the first attribute.
    #[serde(default = "default_true")]
    pub include_binding: bool,

    /// Module the component is imported from.
    #[serde(default = "default_source_module")]
    pub source_module: String,
}

impl Default for GenerateOptions {
    #[inline]
    fn default() -> Self {
        Self {
            include_binding: true,
            source_module: DEFAULT_SOURCE_MODULE.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Set whether the binding directive is emitted.
    #[inline]
    pub fn with_binding(mut self, include_binding: bool) -> Self {
        self.include_binding = include_binding;
        self
    }

    /// Set the import source module.
    #[inline]
    pub fn with_source_module(mut self, source_module: impl Into<String>) -> Self {
        self.source_module = source_module.into();
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_source_module() -> String {
    DEFAULT_SOURCE_MODULE.to_string()
}

/// Error type for code generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to serialize value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything the playground's code tab shows for one property bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Import line.
    pub import: String,
    /// The self-closing tag alone.
    pub tag: String,
    /// Import, state setup and tag as one runnable component.
    pub full: String,
}
