use std::path::{Path, PathBuf};

use thiserror::Error;

use super::segment::TranscriptSegment;

/// Failures raised by transcription providers. The core never swallows
/// these; callers decide how to present them.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no audio track in {path}")]
    NoAudioTrack { path: PathBuf },
    #[error("failed to decode audio from {path}: {reason}")]
    AudioDecode { path: PathBuf, reason: String },
    #[error("failed to load speech model {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },
    #[error("speech inference failed: {0}")]
    Inference(String),
}

/// Domain interface for converting a media file into a transcript.
///
/// Implementations return segments ordered by start time. Any model,
/// service, or subprocess-backed recognizer satisfying this shape is
/// interchangeable.
pub trait TranscriptionProvider: Send {
    fn transcribe(&self, media: &Path) -> Result<Vec<TranscriptSegment>, ProviderError>;
}
