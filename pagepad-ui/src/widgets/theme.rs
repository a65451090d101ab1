//! Theme toggle widget.

use std::fmt;

use pagepad_store::{Store, StoreError};

use crate::surface::Surface;

/// Store key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Root presentation attribute carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Element id of the toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// A color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted/attribute form. Anything but the two literal
    /// values is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The persisted/attribute form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The display name, as shown on the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The other theme.
    pub fn inverse(self) -> Self {
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

/// Widget owning the persisted theme and the toggle control.
pub struct ThemeWidget {
    store: Store,
}

impl ThemeWidget {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load the stored theme and apply it.
    ///
    /// When no valid theme is stored, the default derives from the
    /// surface's color-scheme preference: dark if preferred, else light.
    pub fn init(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        let saved = self
            .store
            .get_raw(THEME_KEY)?
            .and_then(|value| Theme::parse(&value));

        let initial = saved.unwrap_or(if surface.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        });

        self.apply(surface, initial)
    }

    /// Apply a theme: set the root attribute, persist, and relabel the
    /// toggle with the *opposite* theme's name (the label shows the
    /// action, not the state).
    pub fn apply(&self, surface: &mut dyn Surface, theme: Theme) -> Result<(), StoreError> {
        surface.set_root_attr(THEME_ATTR, theme.as_str());
        self.store.set_raw(THEME_KEY, theme.as_str())?;
        surface.set_text(TOGGLE_ID, theme.inverse().label());
        Ok(())
    }

    /// Toggle click: invert whatever the root attribute currently shows
    /// (defaulting to light when unset) and apply it.
    pub fn toggle(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        let current = surface
            .root_attr(THEME_ATTR)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(Theme::Light);

        self.apply(surface, current.inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_inverse_is_involution() {
        assert_eq!(Theme::Light.inverse(), Theme::Dark);
        assert_eq!(Theme::Dark.inverse().inverse(), Theme::Dark);
    }
}
