use super::segment::TranscriptSegment;

/// The ordered segments for the currently loaded media file.
///
/// Created empty, replaced wholesale each time a new file is transcribed,
/// never mutated element-wise. The store accepts whatever the provider
/// returned; ordering and overlap are not validated here.
#[derive(Debug, Default)]
pub struct TranscriptStore {
    segments: Vec<TranscriptSegment>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire transcript in one visible update.
    pub fn load(&mut self, segments: Vec<TranscriptSegment>) {
        self.segments = segments;
    }

    pub fn all(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}
