use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use vidscribe_core::shared::whisper_model::WhisperModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    System,
    Dark,
    Light,
}

impl Appearance {
    pub const ALL: &[Appearance] = &[Appearance::System, Appearance::Dark, Appearance::Light];
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::System => write!(f, "System"),
            Appearance::Dark => write!(f, "Dark"),
            Appearance::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whisper model size label ("tiny", "base", "small").
    pub model: String,
    pub appearance: Appearance,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: WhisperModel::Base.label().to_string(),
            appearance: Appearance::System,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("VidScribe").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = fs::write(path, json);
            }
        }
    }

    /// The configured model, falling back to Base for unknown labels.
    pub fn model_size(&self) -> WhisperModel {
        self.model.parse().unwrap_or(WhisperModel::Base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_base() {
        assert_eq!(Settings::default().model_size(), WhisperModel::Base);
    }

    #[test]
    fn test_unknown_model_label_falls_back_to_base() {
        let settings = Settings {
            model: "gigantic".to_string(),
            appearance: Appearance::Dark,
        };
        assert_eq!(settings.model_size(), WhisperModel::Base);
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings {
            model: "small".to_string(),
            appearance: Appearance::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model_size(), WhisperModel::Small);
        assert_eq!(back.appearance, Appearance::Light);
    }
}
