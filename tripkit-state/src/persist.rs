//! Durable settings - the three values that survive a restart
//!
//! Only the session token, theme, and language are mirrored to disk, as one
//! JSON file under the platform data directory. The file is read once at
//! startup and rewritten whenever one of the three changes. A failed write
//! is logged and swallowed; losing the mirror must never take down the
//! session it mirrors.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::effect::AppEffect;
use crate::app::state::{AppState, Theme};

/// The persisted subset of application state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            theme: Theme::default(),
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".into()
}

/// Settings persistence error
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings file I/O failed: {}", e),
            SettingsError::Encode(e) => write!(f, "Settings encoding failed: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Encode(e)
    }
}

/// File-backed store for [`Settings`]
#[derive(Clone, Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at an explicit path (tests, alternate profiles).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_location() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tripkit");
        Self {
            path: dir.join("settings.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings from disk.
    ///
    /// A missing file is a fresh install; a corrupt file is logged and
    /// treated the same. Either way the defaults come back.
    pub fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not read settings");
                return Settings::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt settings file; using defaults");
                Settings::default()
            }
        }
    }

    /// Write settings to disk, creating the directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load, mutate, save.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> Result<Settings, SettingsError> {
        let mut settings = self.load();
        f(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }

    pub fn set_token(&self, token: &str) -> Result<(), SettingsError> {
        self.update(|s| s.token = Some(token.to_owned())).map(|_| ())
    }

    pub fn clear_token(&self) -> Result<(), SettingsError> {
        self.update(|s| s.token = None).map(|_| ())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), SettingsError> {
        self.update(|s| s.theme = theme).map(|_| ())
    }

    pub fn set_language(&self, language: &str) -> Result<(), SettingsError> {
        self.update(|s| s.language = language.to_owned())
            .map(|_| ())
    }
}

/// Copy the persisted preferences into a fresh application state.
///
/// The token is deliberately not restored into the session here: a token
/// alone is not an authenticated session. Callers re-validate
/// `settings.token` with the auth collaborator and dispatch `Login` on
/// success.
pub fn hydrate_app_state(state: &mut AppState, settings: &Settings) {
    state.theme = settings.theme;
    state.language = settings.language.clone();
}

/// Mirror a persistence effect from the app reducer into the settings file.
///
/// Non-persistence effects (theme application) are left for the caller.
/// Failures are logged, never propagated.
pub fn persist_app_effect(store: &SettingsStore, effect: &AppEffect) {
    let result = match effect {
        AppEffect::PersistToken(token) => store.set_token(token),
        AppEffect::ClearToken => store.clear_token(),
        AppEffect::PersistTheme(theme) => store.set_theme(*theme),
        AppEffect::PersistLanguage(language) => store.set_language(language),
        AppEffect::ApplyTheme(_) => return,
    };
    if let Err(e) = result {
        tracing::warn!(error = %e, "Settings mirror write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("settings.json"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let settings = store.load();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_token("tok123").unwrap();
        store.set_theme(Theme::Dark).unwrap();
        store.set_language("uk").unwrap();

        let settings = store.load();
        assert_eq!(settings.token.as_deref(), Some("tok123"));
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, "uk");
    }

    #[test]
    fn test_clear_token_keeps_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_token("tok").unwrap();
        store.set_theme(Theme::Dark).unwrap();

        store.clear_token().unwrap();

        let settings = store.load();
        assert_eq!(settings.token, None);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_persist_app_effect_mirrors_writes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        persist_app_effect(&store, &AppEffect::PersistToken("tok".into()));
        persist_app_effect(&store, &AppEffect::PersistTheme(Theme::Dark));
        persist_app_effect(&store, &AppEffect::PersistLanguage("uk".into()));

        let settings = store.load();
        assert_eq!(settings.token.as_deref(), Some("tok"));
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, "uk");

        persist_app_effect(&store, &AppEffect::ClearToken);
        assert_eq!(store.load().token, None);
    }

    #[test]
    fn test_hydrate_restores_preferences_not_session() {
        let mut state = AppState::default();
        let settings = Settings {
            token: Some("tok".into()),
            theme: Theme::Dark,
            language: "uk".into(),
        };

        hydrate_app_state(&mut state, &settings);

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.language, "uk");
        assert!(!state.session.is_authenticated());
    }
}
