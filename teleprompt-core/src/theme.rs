use crate::prefs::Prefs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Preference key the active theme is stored under.
pub const THEME_KEY: &str = "theme";

/// Presentation theme. Light is what first-time viewers get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other one.
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow::anyhow!("unknown theme: {}", other)),
        }
    }
}

/// Reads and persists the viewer's theme choice.
#[derive(Debug, Clone)]
pub struct ThemeSwitch {
    prefs: Prefs,
}

impl ThemeSwitch {
    pub fn new(prefs: Prefs) -> Self {
        Self { prefs }
    }

    /// Stored theme. Absent or unparseable values count as Light.
    pub fn current(&self) -> rusqlite::Result<Theme> {
        let stored = self.prefs.get(THEME_KEY)?;
        Ok(stored.and_then(|s| s.parse().ok()).unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> rusqlite::Result<()> {
        self.prefs.set(THEME_KEY, theme.as_str())
    }

    /// Flip and persist; returns the newly active theme.
    pub fn toggle(&self) -> rusqlite::Result<Theme> {
        let next = self.current()?.flipped();
        self.set(next)?;
        info!("theme switched to {}", next);
        Ok(next)
    }
}
