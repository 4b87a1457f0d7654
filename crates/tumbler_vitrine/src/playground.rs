//! Playground page state.

use serde::{Deserialize, Serialize};
use tumbler_carton::{PropValue, PropertyBag};
use tumbler_palette::{ComponentDescriptor, Registry, RegistryError};
use tumbler_sketch::{render_full_example, GenerateError, GenerateOptions};

/// Tab shown in the playground's main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Preview,
    Code,
}

/// Language of the code panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    #[default]
    Svelte,
    TypeScript,
}

/// Which panels the playground is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundState {
    pub active_tab: Tab,
    pub code_language: CodeLanguage,
}

impl PlaygroundState {
    #[inline]
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    #[inline]
    pub fn set_code_language(&mut self, language: CodeLanguage) {
        self.code_language = language;
    }
}

/// Navigation sidebar, closed by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// An editing session on one component: the live property bag behind the
/// preview and the code panel.
#[derive(Debug, Clone)]
pub struct Playground<'a> {
    descriptor: &'a ComponentDescriptor,
    props: PropertyBag,
    pub state: PlaygroundState,
}

impl<'a> Playground<'a> {
    /// Open a session on `component_id`, starting from its defaults.
    pub fn open(registry: &'a Registry, component_id: &str) -> Result<Self, RegistryError> {
        let descriptor = registry.get_descriptor(component_id)?;
        Ok(Self::new(descriptor))
    }

    pub fn new(descriptor: &'a ComponentDescriptor) -> Self {
        Self {
            descriptor,
            props: descriptor.defaults.clone(),
            state: PlaygroundState::default(),
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &'a ComponentDescriptor {
        self.descriptor
    }

    #[inline]
    pub fn props(&self) -> &PropertyBag {
        &self.props
    }

    /// Edit one property, returning the previous value.
    pub fn set_prop(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.props.insert(key, value)
    }

    /// Back to the component defaults.
    pub fn reset(&mut self) {
        self.props = self.descriptor.defaults.clone();
    }

    /// Replace the bag with the defaults overlaid by a curated example.
    /// Returns `false` when the component has no example by that name.
    pub fn load_example(&mut self, name: &str) -> bool {
        match self.descriptor.example_bag(name) {
            Some(bag) => {
                self.props = bag;
                true
            }
            None => false,
        }
    }

    /// Code for the current bag, as shown in the code panel.
    pub fn code(&self, options: &GenerateOptions) -> Result<String, GenerateError> {
        render_full_example(&self.descriptor.name, &self.props, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playground_state() {
        let mut state = PlaygroundState::default();
        assert_eq!(state.active_tab, Tab::Preview);
        assert_eq!(state.code_language, CodeLanguage::Svelte);

        state.set_active_tab(Tab::Code);
        state.set_code_language(CodeLanguage::TypeScript);
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"activeTab":"code","codeLanguage":"typescript"}"#
        );
    }

    #[test]
    fn test_sidebar() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.close();
        sidebar.close();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_session() {
        let registry = tumbler_palette::registry();
        let mut playground = Playground::open(registry, "switch").unwrap();
        assert_eq!(playground.props(), &playground.descriptor().defaults);

        assert_eq!(
            playground.set_prop("size", "xl"),
            Some(PropValue::from("md"))
        );
        assert!(playground
            .code(&GenerateOptions::default())
            .unwrap()
            .contains("  size=\"xl\"\n"));

        assert!(playground.load_example("Teal Theme"));
        assert_eq!(playground.props().get_str("colorScheme"), Some("teal"));
        assert_eq!(playground.props().get_str("size"), Some("md"));
        assert!(!playground.load_example("Nope"));

        playground.reset();
        assert_eq!(playground.props().get_str("colorScheme"), Some("blue"));
    }

    #[test]
    fn test_unknown_component() {
        let err = Playground::open(tumbler_palette::registry(), "button").unwrap_err();
        assert_eq!(err.to_string(), "component 'button' not found");
    }
}
