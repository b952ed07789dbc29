use std::fmt;
use std::str::FromStr;

/// Whisper ggml model sizes the transcriber can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhisperModel {
    Tiny,
    Base,
    Small,
}

impl WhisperModel {
    pub const ALL: &[WhisperModel] = &[WhisperModel::Tiny, WhisperModel::Base, WhisperModel::Small];

    pub fn label(self) -> &'static str {
        match self {
            WhisperModel::Tiny => "tiny",
            WhisperModel::Base => "base",
            WhisperModel::Small => "small",
        }
    }

    pub fn file_name(self) -> String {
        format!("ggml-{}.bin", self.label())
    }

    pub fn url(self) -> String {
        format!(
            "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-{}.bin",
            self.label()
        )
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhisperModel::Tiny => write!(f, "Tiny"),
            WhisperModel::Base => write!(f, "Base"),
            WhisperModel::Small => write!(f, "Small"),
        }
    }
}

impl FromStr for WhisperModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(WhisperModel::Tiny),
            "base" => Ok(WhisperModel::Base),
            "small" => Ok(WhisperModel::Small),
            other => Err(format!(
                "Model must be one of: tiny, base, small, got '{other}'"
            )),
        }
    }
}
