use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::PathBuf,
};

use derive_more::Display;

const THEME_KEY: &str = "theme";

#[derive(Debug, Display)]
pub enum PreferenceError {
    #[display("Preference file error: {_0}")]
    Io(String),

    #[display("Preference file is not valid JSON: {_0}")]
    Format(String),
}

impl std::error::Error for PreferenceError {}

impl From<std::io::Error> for PreferenceError {
    fn from(err: std::io::Error) -> Self {
        PreferenceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(err: serde_json::Error) -> Self {
        PreferenceError::Format(err.to_string())
    }
}

/// Key/value storage scoped to the site's UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a small JSON object on disk, rewritten on every set.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(FilePreferences { path, values })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// UI-wide state handed to the site's sections by construction: the colour
/// theme (persisted) and whether the admin panel is shown (session only).
#[derive(Debug)]
pub struct UiContext<S: PreferenceStore> {
    store: S,
    theme: Theme,
    admin_visible: bool,
}

impl<S: PreferenceStore> UiContext<S> {
    /// Anything other than a stored `dark` starts in light mode.
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        };

        UiContext { store, theme, admin_visible: false }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.theme = theme;
        self.store.set(THEME_KEY, &theme.to_string())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn admin_visible(&self) -> bool {
        self.admin_visible
    }

    pub fn set_admin_visible(&mut self, visible: bool) {
        self.admin_visible = visible;
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_without_preference() {
        let ctx = UiContext::load(MemoryPreferences::default());

        assert_eq!(ctx.theme(), Theme::Light);
        assert!(!ctx.admin_visible());
    }

    #[test]
    fn toggling_persists_the_choice() {
        let mut ctx = UiContext::load(MemoryPreferences::default());

        assert_eq!(ctx.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(ctx.store().get("theme").as_deref(), Some("dark"));

        assert_eq!(ctx.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(ctx.store().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn unrecognised_stored_value_means_light() {
        let mut store = MemoryPreferences::default();
        store.set("theme", "sepia").unwrap();

        assert!(!UiContext::load(store).is_dark());
    }

    #[test]
    fn file_preferences_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut ctx = UiContext::load(FilePreferences::open(&path).unwrap());
        ctx.set_theme(Theme::Dark).unwrap();

        let reopened = UiContext::load(FilePreferences::open(&path).unwrap());
        assert!(reopened.is_dark());
    }

    #[test]
    fn corrupt_preference_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(FilePreferences::open(&path), Err(PreferenceError::Format(_))));
    }
}
