use std::path::Path;

use super::audio_track::AudioTrack;

/// Domain interface for decoding a media file's audio stream.
pub trait AudioReader: Send {
    /// Decode the best audio stream to mono at `target_sample_rate`.
    /// Returns `Ok(None)` when the file has no audio stream.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioTrack>, Box<dyn std::error::Error>>;
}
