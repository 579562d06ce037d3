use leptos::prelude::*;
use vision_app::domain::{ThemePreference, ThemeSettings, ThemeStore};
use vision_errors::AppError;

#[cfg(feature = "hydrate")]
use vision_app::domain::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};

/// Browser local storage. Holds nothing during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    #[cfg(feature = "hydrate")]
    fn load(&self) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
    }

    #[cfg(not(feature = "hydrate"))]
    fn load(&self) -> Option<String> {
        None
    }

    #[cfg(feature = "hydrate")]
    fn save(&self, value: &str) -> Result<(), AppError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    #[cfg(not(feature = "hydrate"))]
    fn save(&self, _value: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// Mirrors the theme onto `<html data-theme>`.
pub fn apply_to_document(theme: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = document().document_element() {
            if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                tracing::warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, e);
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = theme;
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    settings: RwSignal<ThemeSettings<BrowserThemeStore>>,
}

impl ThemeContext {
    /// Reads the stored preference once and shares it with the tree.
    pub fn provide() -> Self {
        let ctx = Self {
            settings: RwSignal::new(ThemeSettings::load(BrowserThemeStore)),
        };
        provide_context(ctx);
        ctx
    }

    pub fn current(&self) -> ThemePreference {
        self.settings.with(|settings| settings.current())
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    pub fn toggle(&self, checked: bool) {
        let next = ThemePreference::from_toggle(checked);
        if let Some(Err(e)) = self.settings.try_update(|settings| settings.set(next)) {
            tracing::warn!("Theme not persisted: {}", e);
        }
        apply_to_document(next);
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
