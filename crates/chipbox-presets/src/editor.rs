use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EDITOR_VERSION: &str = "1.6";
pub const EDITOR_NAME: &str = "ChipBox";
pub const RELEASE_NOTES_URL: &str = "./patch_notes.html";

pub fn version_display_name() -> String {
    format!("{EDITOR_NAME} {EDITOR_VERSION}")
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access editor settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse editor settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no config directory available")]
    NoConfigDir,
}

/// Editor state that lives next to the preset catalog but outside it.
///
/// The host application owns one instance and is its only writer; readers
/// borrow it. Nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSettings {
    /// Sample URLs loaded by the current song, `None` until a song declares any.
    /// Session state, never written to `editor.json`.
    #[serde(skip)]
    pub custom_samples: Option<Vec<String>>,
    pub show_song_details_alert: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            custom_samples: None,
            show_song_details_alert: true,
        }
    }
}

impl EditorSettings {
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push(EDITOR_NAME);
        path.push("editor.json");
        Ok(path)
    }

    /// Loads settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let loaded = Self::default_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "using default editor settings");
                Self::default()
            }
        }
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Saves to the default location, logging instead of failing.
    pub fn save(&self) {
        let result = Self::default_path().and_then(|path| self.save_to(&path));
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write editor settings");
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn add_custom_sample(&mut self, url: impl Into<String>) {
        let url = url.into();
        let samples = self.custom_samples.get_or_insert_with(Vec::new);
        if !samples.contains(&url) {
            samples.push(url);
        }
    }

    pub fn clear_custom_samples(&mut self) {
        self.custom_samples = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = EditorSettings::load_from(&dir.path().join("editor.json")).unwrap();
        assert_eq!(settings, EditorSettings::default());
        assert!(settings.show_song_details_alert);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("editor.json");
        let mut settings = EditorSettings::default();
        settings.show_song_details_alert = false;
        settings.save_to(&path).unwrap();

        let reloaded = EditorSettings::load_from(&path).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn custom_samples_stay_out_of_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("editor.json");
        let mut settings = EditorSettings::default();
        settings.add_custom_sample("https://example.com/kick.wav");
        settings.add_custom_sample("https://example.com/kick.wav");
        assert_eq!(settings.custom_samples.as_ref().map(Vec::len), Some(1));
        settings.save_to(&path).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(!saved.contains("customSamples"), "{saved}");
        let reloaded = EditorSettings::load_from(&path).unwrap();
        assert_eq!(reloaded.custom_samples, None);

        settings.clear_custom_samples();
        assert_eq!(settings.custom_samples, None);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{"customSamples":["a.wav"]}"#).unwrap();
        assert_eq!(settings, EditorSettings::default());
        assert!(settings.show_song_details_alert);
    }

    #[test]
    fn display_name_includes_version() {
        assert_eq!(version_display_name(), "ChipBox 1.6");
    }
}
