//! Page metadata for search engines and link previews.

use serde::{Deserialize, Serialize};

/// Metadata of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title: "Svelte Toggle Switch - Modern Toggle Component".to_string(),
            description: "A comprehensive, accessible toggle switch component for Svelte with \
                          multiple design variants, themes, and customization options"
                .to_string(),
            url: "https://svelte-toggle-switch.ishansasika.dev".to_string(),
            image: None,
            kind: Some("website".to_string()),
            keywords: [
                "svelte",
                "toggle",
                "switch",
                "component",
                "ui",
                "accessible",
                "typescript",
                "multi-design",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Per-page overrides; unset fields keep the site default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl SeoConfig {
    /// Field-wise override of `self` by `overrides`.
    pub fn merge(mut self, overrides: SeoOverrides) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(description) = overrides.description {
            self.description = description;
        }
        if let Some(url) = overrides.url {
            self.url = url;
        }
        if overrides.image.is_some() {
            self.image = overrides.image;
        }
        if overrides.kind.is_some() {
            self.kind = overrides.kind;
        }
        if let Some(keywords) = overrides.keywords {
            self.keywords = keywords;
        }
        self
    }
}
