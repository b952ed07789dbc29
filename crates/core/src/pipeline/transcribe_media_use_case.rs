use std::path::Path;

use crate::transcript::domain::transcript_store::TranscriptStore;
use crate::transcript::domain::transcription_provider::{ProviderError, TranscriptionProvider};

/// Runs the provider against a media file and replaces the store's
/// transcript with the result.
pub struct TranscribeMediaUseCase {
    provider: Box<dyn TranscriptionProvider>,
}

impl TranscribeMediaUseCase {
    pub fn new(provider: Box<dyn TranscriptionProvider>) -> Self {
        Self { provider }
    }

    /// Returns the number of segments loaded. On provider failure the store
    /// is left untouched.
    pub fn execute(
        &self,
        media: &Path,
        store: &mut TranscriptStore,
    ) -> Result<usize, ProviderError> {
        let segments = self.provider.transcribe(media)?;
        let count = segments.len();
        store.load(segments);
        log::info!("Loaded {count} transcript segments from {}", media.display());
        Ok(count)
    }
}
