use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use vision_errors::AppError;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Corporate,
    Luxury,
    Winter,
    Dark,
    Black,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 6] = [
        Self::Light,
        Self::Corporate,
        Self::Luxury,
        Self::Winter,
        Self::Dark,
        Self::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Corporate => "corporate",
            Self::Luxury => "luxury",
            Self::Winter => "winter",
            Self::Dark => "dark",
            Self::Black => "black",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The toggle is binary: checked means dark, unchecked means light.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s.trim())
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Durable key-value slot holding the raw theme name.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), AppError>;
}

/// Process-local store for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        *guard = Some(value.to_string());
        Ok(())
    }
}

/// Theme preference read once from a store and written through on change.
#[derive(Debug)]
pub struct ThemeSettings<S: ThemeStore> {
    store: S,
    current: ThemePreference,
}

impl<S: ThemeStore> ThemeSettings<S> {
    /// Persisted value wins; missing or unknown values fall back to light.
    pub fn load(store: S) -> Self {
        let current = store
            .load()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, preference: ThemePreference) -> Result<(), AppError> {
        self.current = preference;
        self.store.save(preference.as_str())
    }

    pub fn toggle(&mut self, checked: bool) -> Result<ThemePreference, AppError> {
        let next = ThemePreference::from_toggle(checked);
        self.set(next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _value: &str) -> Result<(), AppError> {
            Err(AppError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let settings = ThemeSettings::load(MemoryThemeStore::new());
        assert_eq!(settings.current(), ThemePreference::Light);
    }

    #[test]
    fn test_persisted_value_wins() {
        let settings = ThemeSettings::load(MemoryThemeStore::with_value("dark"));
        assert_eq!(settings.current(), ThemePreference::Dark);

        let settings = ThemeSettings::load(MemoryThemeStore::with_value("luxury"));
        assert_eq!(settings.current(), ThemePreference::Luxury);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let settings = ThemeSettings::load(MemoryThemeStore::with_value("\"dark\""));
        assert_eq!(settings.current(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_writes_through_and_survives_reload() {
        let mut settings = ThemeSettings::load(MemoryThemeStore::new());
        assert_eq!(settings.toggle(true).unwrap(), ThemePreference::Dark);
        assert_eq!(settings.store().load().as_deref(), Some("dark"));

        let reloaded = ThemeSettings::load(MemoryThemeStore::with_value(
            settings.store().load().unwrap(),
        ));
        assert_eq!(reloaded.current(), ThemePreference::Dark);

        settings.toggle(false).unwrap();
        assert_eq!(settings.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_failed_write_still_updates_current() {
        let mut settings = ThemeSettings::load(FailingStore);
        assert!(settings.set(ThemePreference::Dark).is_err());
        assert_eq!(settings.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_names_round_trip() {
        for theme in ThemePreference::ALL {
            assert_eq!(theme.to_string().parse::<ThemePreference>(), Ok(theme));
        }
        assert!("solarized".parse::<ThemePreference>().is_err());
    }
}
