use std::path::Path;

/// Container-level facts the players need before transcription finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaInfo {
    pub duration_secs: f64,
    pub has_audio: bool,
}

/// Domain interface for inspecting a media file without decoding it.
pub trait MediaProbe: Send {
    fn probe(&self, path: &Path) -> Result<MediaInfo, Box<dyn std::error::Error>>;
}
