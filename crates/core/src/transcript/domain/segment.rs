/// A single timed unit of transcribed text, with offsets in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Whether playback position `t` falls inside this segment.
    ///
    /// Both bounds are inclusive. Malformed ranges (negative start, or end
    /// before start) are never active; they still appear in the rendered
    /// transcript.
    pub fn contains(&self, t: f64) -> bool {
        self.is_well_formed() && self.start_time <= t && t <= self.end_time
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_time >= 0.0 && self.end_time >= self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}
