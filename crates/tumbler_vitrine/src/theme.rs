//! Preview background themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Background theme of the preview area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Gray,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Gray];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Gray => "gray",
        }
    }

    /// Background color of the preview area.
    #[inline]
    pub const fn background_color(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1f2937",
            Theme::Gray => "#f3f4f6",
        }
    }

    /// Light becomes dark; anything else goes back to light.
    #[inline]
    pub const fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::Gray => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a theme name that is not `light`, `dark` or `gray`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected light, dark or gray)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Gray.toggled(), Theme::Light);
    }

    #[test]
    fn test_background_colors() {
        assert_eq!(Theme::Light.background_color(), "#ffffff");
        assert_eq!(Theme::Dark.background_color(), "#1f2937");
        assert_eq!(Theme::Gray.background_color(), "#f3f4f6");
    }

    #[test]
    fn test_parse() {
        assert_eq!("gray".parse::<Theme>(), Ok(Theme::Gray));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(UnknownTheme("sepia".to_string()))
        );
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
