use crate::utils::storage::PreferenceStore;

pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    /// Only the exact value "dark" selects the dark appearance.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self { is_dark: value == Some("dark") }
    }

    pub fn as_str(&self) -> &'static str {
        if self.is_dark { "dark" } else { "light" }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.is_dark { "bi bi-moon-fill" } else { "bi bi-sun-fill" }
    }

    pub fn body_class(&self) -> &'static str {
        if self.is_dark { DARK_CLASS } else { "" }
    }

    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        match store.get(THEME_KEY) {
            Ok(value) => Self::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Self::default()
            }
        }
    }

    /// Flips the appearance and writes the new value back. A failed write
    /// leaves the flipped state in place for the rest of the page's life.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &S) {
        self.is_dark = !self.is_dark;
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            log::warn!("Could not persist theme preference: {}", e);
        }
        log::debug!("Theme switched to {}", self.as_str());
    }
}

/// Mirrors the theme onto `<body>` so page CSS outside the app root follows it.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme_to_body(theme: ThemeState) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme_to_body(_theme: ThemeState) {}
