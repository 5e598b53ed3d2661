//! Light/dark theme preference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::MemoError;

/// Colour theme the presentation layer should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme to start with: a stored choice wins, otherwise follow the
    /// system's dark-mode preference.
    #[must_use]
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Self {
        stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = MemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(MemoError::InvalidTheme(s.to_string())),
        }
    }
}
