//! # tumbler_sketch
//!
//! Sketch - usage snippet generation for the Tumbler playground.
//!
//! ## Name Origin
//!
//! A **sketch** is the quick drawing that shows how a finished piece will
//! look. This crate draws the code a user would write to get the widget
//! currently shown in the playground preview.
//!
//! Every function here is pure: the output depends only on the arguments,
//! nothing is cached, and calls can run concurrently without coordination.
//! Generation does not consult the prop schema; any property bag renders.
//!
//! ## Usage
//!
//! ```rust
//! use tumbler_carton::bag;
//! use tumbler_sketch::{render_full_example, GenerateOptions};
//!
//! let props = bag! { "design" => "ios", "colorScheme" => "green" };
//! let code = render_full_example("Switch", &props, &GenerateOptions::default()).unwrap();
//!
//! assert!(code.starts_with("<script>\n  import Switch from 'svelte-toggle-switch';"));
//! assert!(code.ends_with("  design=\"ios\"\n  colorScheme=\"green\"\n/>"));
//! ```

mod example;
mod literal;
mod tag;
mod types;

pub use example::{render_full_example, render_import_statement, render_snippet};
pub use literal::format_value_literal;
pub use tag::render_tag;
pub use types::{
    GenerateError, GenerateOptions, Snippet, BINDING_DIRECTIVE, DEFAULT_SOURCE_MODULE,
};
