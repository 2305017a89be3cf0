use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use web_sys::window;

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
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
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Theme for a stored value. Missing or unknown values give the default,
/// dark.
pub fn resolve(stored: Option<&str>) -> Theme {
    match stored.map(str::parse::<Theme>) {
        Some(Ok(theme)) => theme,
        Some(Err(err)) => {
            log::debug!("ignoring stored theme: {}", err);
            Theme::default()
        }
        None => Theme::default(),
    }
}

pub fn load() -> Theme {
    resolve(stored().as_deref())
}

fn stored() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

/// Reflects `theme` as the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(err) = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark)
    {
        log::warn!("failed to apply theme class: {:?}", err);
    }
}

/// Remembers an explicit choice for the next visit.
pub fn persist(theme: Theme) {
    match window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => {
            if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                log::warn!("failed to persist theme: {:?}", err);
            }
        }
        _ => log::debug!("local storage unavailable, theme not persisted"),
    }
}
