//! # Tumbler
//!
//! Prop schemas and usage snippets for the svelte-toggle-switch playground.
//!
//! This crate re-exports all Tumbler sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared property values and formatting helpers
//! - [`palette`] - Prop schema registry and the built-in catalog
//! - [`sketch`] - Usage snippet generation
//! - [`vitrine`] - Playground session, preferences and page metadata

/// Shared property values and formatting helpers.
pub use tumbler_carton as carton;

/// Prop schema registry and the built-in catalog.
pub use tumbler_palette as palette;

/// Usage snippet generation.
pub use tumbler_sketch as sketch;

/// Playground session, preferences and page metadata.
pub use tumbler_vitrine as vitrine;
