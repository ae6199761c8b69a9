//! Saved light/dark preference.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::THEME_KEY;
use crate::error::EventDeskResult;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Invalid theme '{}'. Expected light or dark", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The explicitly saved theme, if any. Unrecognized values count as unset.
pub fn saved<S: KeyValueStore + ?Sized>(store: &S) -> EventDeskResult<Option<Theme>> {
    Ok(store.get(THEME_KEY)?.and_then(|raw| raw.parse().ok()))
}

/// Saved preference first, then the system preference.
pub fn resolve<S: KeyValueStore + ?Sized>(
    store: &S,
    system_prefers_dark: bool,
) -> EventDeskResult<Theme> {
    let system = if system_prefers_dark { Theme::Dark } else { Theme::Light };
    Ok(saved(store)?.unwrap_or(system))
}

/// Flip `current` and remember the choice.
pub fn toggle<S: KeyValueStore + ?Sized>(store: &mut S, current: Theme) -> EventDeskResult<Theme> {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str())?;
    Ok(next)
}

/// Forget the saved choice and follow the system again.
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> EventDeskResult<()> {
    store.remove(THEME_KEY)
}
