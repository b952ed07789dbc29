use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::media::domain::audio_reader::AudioReader;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::transcript::domain::segment::TranscriptSegment;
use crate::transcript::domain::transcription_provider::{ProviderError, TranscriptionProvider};

/// Transcription provider backed by whisper.cpp via whisper-rs.
///
/// Decodes the media file's audio through the injected reader and returns
/// segment-level timestamps.
pub struct WhisperProvider {
    model_path: PathBuf,
    language: String,
    reader: Box<dyn AudioReader>,
}

impl std::fmt::Debug for WhisperProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperProvider")
            .field("model_path", &self.model_path)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl WhisperProvider {
    pub fn new(model_path: &Path, reader: Box<dyn AudioReader>) -> Result<Self, ProviderError> {
        if !model_path.exists() {
            return Err(ProviderError::ModelLoad {
                path: model_path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
            language: "en".to_string(),
            reader,
        })
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

impl TranscriptionProvider for WhisperProvider {
    fn transcribe(&self, media: &Path) -> Result<Vec<TranscriptSegment>, ProviderError> {
        let audio = self
            .reader
            .read_audio(media, WHISPER_SAMPLE_RATE)
            .map_err(|e| ProviderError::AudioDecode {
                path: media.to_path_buf(),
                reason: e.to_string(),
            })?
            .ok_or_else(|| ProviderError::NoAudioTrack {
                path: media.to_path_buf(),
            })?;

        let model_str = self
            .model_path
            .to_str()
            .ok_or_else(|| ProviderError::ModelLoad {
                path: self.model_path.clone(),
                reason: "path is not valid UTF-8".to_string(),
            })?;
        let ctx = WhisperContext::new_with_params(model_str, WhisperContextParameters::default())
            .map_err(|e| ProviderError::ModelLoad {
            path: self.model_path.clone(),
            reason: e.to_string(),
        })?;

        let mut state = ctx
            .create_state()
            .map_err(|e| ProviderError::Inference(e.to_string()))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(self.language.as_str()));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_threads() as i32);

        state
            .full(params, audio.samples())
            .map_err(|e| ProviderError::Inference(e.to_string()))?;

        let mut segments = Vec::new();
        for seg_idx in 0..state.full_n_segments() {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let text = match segment.to_str() {
                Ok(t) => t.trim(),
                Err(_) => continue,
            };
            if text.is_empty() {
                continue;
            }

            // Whisper reports timestamps in centiseconds (10ms units)
            let start_time = segment.start_timestamp() as f64 / 100.0;
            let end_time = segment.end_timestamp() as f64 / 100.0;

            segments.push(TranscriptSegment::new(start_time, end_time, text));
        }

        log::info!(
            "Transcribed {} segments from {}",
            segments.len(),
            media.display()
        );
        Ok(segments)
    }
}

fn num_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::domain::audio_track::AudioTrack;

    struct StubReader;

    impl AudioReader for StubReader {
        fn read_audio(
            &self,
            _: &Path,
            sample_rate: u32,
        ) -> Result<Option<AudioTrack>, Box<dyn std::error::Error>> {
            Ok(Some(AudioTrack::new(vec![0.0; 16000], sample_rate)))
        }
    }

    #[test]
    fn test_new_nonexistent_model_returns_error() {
        let result = WhisperProvider::new(Path::new("/nonexistent/model.bin"), Box::new(StubReader));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_nonexistent_model_error_names_the_path() {
        let err = WhisperProvider::new(Path::new("/nonexistent/model.bin"), Box::new(StubReader))
            .unwrap_err()
            .to_string();
        assert!(
            err.contains("/nonexistent/model.bin"),
            "Expected path in error, got: {err}"
        );
    }

    #[test]
    #[ignore] // Requires the whisper model file
    fn test_transcribe_silence_does_not_crash() {
        let model_path = crate::shared::model_resolver::resolve(
            crate::shared::whisper_model::WhisperModel::Tiny,
            None,
        )
        .expect("Failed to resolve whisper model");

        let provider = WhisperProvider::new(&model_path, Box::new(StubReader))
            .expect("Failed to create provider");
        let result = provider.transcribe(Path::new("ignored.mp4"));
        assert!(result.is_ok(), "Transcription should not error: {result:?}");
    }
}
