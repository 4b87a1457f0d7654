//! Identifier-indexed component registry.

use tumbler_carton::{FxHashMap, Lazy};

use crate::catalog;
use crate::types::{ComponentDescriptor, ExampleGroup};
use crate::validate::SchemaError;

/// Registry lookup or construction failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("component '{id}' not found")]
    NotFound { id: String },

    #[error("component '{id}' is already registered")]
    Duplicate { id: String },
}

/// Read-only collection of component descriptors.
///
/// Built once, then only read; shared references can be handed to any
/// number of threads.
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: Vec<ComponentDescriptor>,
    index: FxHashMap<String, usize>,
    example_groups: Vec<ExampleGroup>,
}

impl Registry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor. Registration order is listing order.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<(), RegistryError> {
        if self.index.contains_key(&descriptor.id) {
            return Err(RegistryError::Duplicate { id: descriptor.id });
        }
        self.index
            .insert(descriptor.id.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Add a gallery example group.
    #[inline]
    pub fn add_example_group(&mut self, group: ExampleGroup) {
        self.example_groups.push(group);
    }

    pub fn get_descriptor(&self, id: &str) -> Result<&ComponentDescriptor, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.id.as_str())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    #[inline]
    pub fn example_groups(&self) -> &[ExampleGroup] {
        &self.example_groups
    }

    #[inline]
    pub fn example_group(&self, id: &str) -> Option<&ExampleGroup> {
        self.example_groups.iter().find(|g| g.id == id)
    }

    /// Validate every descriptor and every example group against the
    /// descriptor it targets.
    pub fn validate(&self) -> Vec<SchemaError> {
        let mut errors: Vec<SchemaError> = self
            .descriptors
            .iter()
            .filter_map(|d| d.validate().err())
            .collect();

        for group in &self.example_groups {
            match self.get_descriptor(&group.component) {
                Ok(descriptor) => {
                    if let Err(err) = descriptor.validate_examples(&group.examples) {
                        errors.push(err);
                    }
                }
                Err(_) => tracing::warn!(
                    "example group '{}' targets unregistered component '{}'",
                    group.id,
                    group.component
                ),
            }
        }

        errors
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(catalog::builtin);

/// The built-in catalog, constructed on first use.
#[inline]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Look up a descriptor in the built-in catalog.
#[inline]
pub fn get_descriptor(id: &str) -> Result<&'static ComponentDescriptor, RegistryError> {
    registry().get_descriptor(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumbler_carton::PropertyBag;

    fn descriptor(id: &str) -> ComponentDescriptor {
        ComponentDescriptor {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            properties: Vec::new(),
            defaults: PropertyBag::new(),
            examples: Vec::new(),
            import_path: String::new(),
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry.register(descriptor("a")).unwrap();
        registry.register(descriptor("b")).unwrap();

        assert_eq!(registry.ids().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(registry.get_descriptor("b").unwrap().name, "B");
        assert_eq!(
            registry.get_descriptor("c").unwrap_err(),
            RegistryError::NotFound {
                id: "c".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = Registry::new();
        registry.register(descriptor("a")).unwrap();
        let err = registry.register(descriptor("a")).unwrap_err();

        assert_eq!(err.to_string(), "component 'a' is already registered");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(get_descriptor("switch").unwrap().name, "Switch");
        assert_eq!(
            get_descriptor("button").unwrap_err().to_string(),
            "component 'button' not found"
        );
    }

    #[test]
    fn test_builtin_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| registry().get_descriptor("switch").is_ok()))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
