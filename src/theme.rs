//! Light and dark theme selection, remembered in a [`Store`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// The key the theme is stored under.
pub const THEME_KEY: &str = "colorpick-theme";

/// A color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The stored name of the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read a stored name. Anything other than `"dark"` is the light theme.
    pub fn from_name(name: &str) -> Self {
        if name == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active theme, saved to a [`Store`] whenever it changes.
#[derive(Clone, Debug)]
pub struct ThemeSettings<S> {
    store: S,
    current: Theme,
}

impl<S: Store> ThemeSettings<S> {
    /// Restore the saved theme. When nothing is saved the dark theme is used
    /// if the host prefers it; otherwise the light theme is used and nothing
    /// is written.
    pub fn init(store: S, prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY).unwrap_or_else(|err| {
            log::warn!("Could not load the saved theme: {err}");
            None
        });

        let mut settings = Self {
            store,
            current: Theme::Light,
        };

        match saved {
            Some(name) => settings.set(Theme::from_name(&name)),
            None if prefers_dark => settings.set(Theme::Dark),
            None => {}
        }

        settings
    }

    /// The active theme.
    pub fn get(&self) -> Theme {
        self.current
    }

    /// Activate and save `theme`.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str().to_owned()) {
            log::warn!("Could not save the {theme} theme: {err}");
        }
    }

    /// Switch to the other theme and return it.
    pub fn toggle(&mut self) -> Theme {
        let theme = self.current.toggled();
        self.set(theme);
        theme
    }

    /// The store backing these settings.
    pub fn store(&self) -> &S {
        &self.store
    }
}
