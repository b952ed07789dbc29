/// Domain interface for the playback position source.
///
/// The caption layer only ever reads the position; play/pause/seek controls
/// belong to the implementation behind this seam.
pub trait PlaybackClock {
    /// Current playback position in seconds.
    fn position(&self) -> f64;
}
