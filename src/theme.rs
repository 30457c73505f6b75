//! Color Theme
//!
//! Light/dark preference, persisted in local storage and applied as
//! `data-theme` on `<body>`.

use std::sync::Arc;

use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    /// Anything other than `dark` reads as light
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: offers the other theme
    pub fn toggle_icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    /// Set `data-theme` on the document body
    pub fn apply(self) {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(e) = body.set_attribute("data-theme", self.as_str()) {
            tracing::warn!("could not apply theme: {:?}", e);
        }
    }
}

/// Where the chosen theme lives between visits
#[derive(Clone)]
pub struct ThemePreference {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl ThemePreference {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn load(&self) -> Theme {
        self.storage
            .get(&self.key)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        self.storage.set(&self.key, theme.as_str());
    }

    /// Flip and persist; returns the new theme
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}
