//! Built-in component catalog.

mod gallery;
mod switch;

pub use gallery::example_groups;
pub use switch::{descriptor as switch_descriptor, PACKAGE_NAME};

use crate::registry::Registry;

/// Build the registry shipped with the playground.
pub(crate) fn builtin() -> Registry {
    let mut registry = Registry::new();

    if let Err(err) = registry.register(switch_descriptor()) {
        tracing::error!("skipping built-in component: {}", err);
    }
    for group in example_groups() {
        registry.add_example_group(group);
    }

    tracing::debug!(
        components = registry.len(),
        example_groups = registry.example_groups().len(),
        "built-in catalog ready"
    );
    registry
}
