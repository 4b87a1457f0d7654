//! # tumbler_vitrine
//!
//! Vitrine - The display case of the Tumbler playground.
//!
//! ## Name Origin
//!
//! A **vitrine** is the glass cabinet a piece is shown in. This crate holds
//! what surrounds the widget on display: the editing session behind the
//! preview, the panels that are open, the preview background, page
//! metadata, and the clipboard the generated code is copied to.

mod clipboard;
mod playground;
mod preferences;
mod seo;
mod theme;

pub use clipboard::{
    copy_to_clipboard, Clipboard, ClipboardError, MemoryClipboard, UnavailableClipboard,
};
pub use playground::{CodeLanguage, Playground, PlaygroundState, SidebarState, Tab};
pub use preferences::{
    JsonFilePreferences, MemoryPreferences, PreferenceError, PreferenceStore, ThemeStore,
    THEME_KEY,
};
pub use seo::{SeoConfig, SeoOverrides};
pub use theme::{Theme, UnknownTheme};
