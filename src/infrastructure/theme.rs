use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// Process-wide theme preference. Initialized once from configuration,
/// updated through the API, dropped at process exit. Single writer, single
/// reader, synchronous read-modify-write.
pub struct ThemeStore {
    current: RwLock<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        ThemeStore {
            current: RwLock::new(initial),
        }
    }

    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    pub fn set(&self, theme: Theme) {
        *self.current.write() = theme;
    }

    pub fn toggle(&self) -> Theme {
        let mut guard = self.current.write();
        *guard = guard.toggled();
        *guard
    }
}
