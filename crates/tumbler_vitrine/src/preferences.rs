//! Persisted user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

/// Key the theme is stored under.
pub const THEME_KEY: &str = "theme";

/// Error type for preference storage.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preference file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value storage for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory preferences, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a file.
///
/// The file is read on every access. A missing file reads as empty and is
/// created, along with its parent directories, on the first write.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/tumbler/preferences.json` for the current user.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tumbler").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let io_error = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(values).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_error)
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        tracing::debug!(path = %self.path.display(), key, value, "preference saved");
        Ok(())
    }
}

/// The current theme, persisted through a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Read the stored theme. Missing, unknown or unreadable values fall
    /// back to [`Theme::Light`].
    pub fn load(store: S) -> Self {
        Self::load_with_default(store, Theme::default())
    }

    /// Like [`load`](Self::load) with a caller-chosen fallback.
    pub fn load_with_default(store: S, fallback: Theme) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|err| {
                tracing::warn!("{}; using the {} theme", err, fallback);
                fallback
            }),
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!("{}; using the {} theme", err, fallback);
                fallback
            }
        };

        Self { store, theme }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to `theme` and persist it.
    pub fn set(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    /// Apply [`Theme::toggled`] and persist the result.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
