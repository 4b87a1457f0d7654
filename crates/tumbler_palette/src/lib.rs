//! # tumbler_palette
//!
//! Palette - the prop schema registry of the Tumbler playground.
//!
//! ## Name Origin
//!
//! A **palette** is the board an artist mixes colors on before touching the
//! canvas. Here it holds everything a visual editor needs before a single
//! line of code is generated: which properties a widget has, what type and
//! control each one uses, their defaults, and curated example setups.
//!
//! ## Concepts
//!
//! - **PropertySchema**: type, control, default and category of one prop
//! - **ComponentDescriptor**: the full catalog entry of one widget
//! - **Example**: a named, curated property bag
//! - **Registry**: identifier-indexed, read-only descriptor lookup
//!
//! ## Usage
//!
//! ```rust
//! use tumbler_palette::{get_descriptor, Category};
//!
//! let switch = get_descriptor("switch").unwrap();
//! assert_eq!(switch.name, "Switch");
//!
//! for property in switch.properties_by_category(Category::Animation) {
//!     println!("{}: {}", property.name, property.control);
//! }
//!
//! assert!(get_descriptor("slider").is_err());
//! ```

pub mod catalog;
pub mod docs;
mod coerce;
mod registry;
mod typescript;
mod types;
mod validate;

pub use coerce::{parse_literal, ValueParseError};
pub use registry::{get_descriptor, registry, Registry, RegistryError};
pub use typescript::generate_typescript_props;
pub use types::{
    Category, ComponentDescriptor, Control, Example, ExampleGroup, PropertySchema, SelectOption,
    ValueType,
};
pub use validate::{SchemaError, SchemaViolation};
