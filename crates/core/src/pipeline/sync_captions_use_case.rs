use crate::playback::domain::caption_sink::CaptionSink;
use crate::playback::domain::playback_clock::PlaybackClock;
use crate::transcript::domain::caption_mapper::CaptionMapper;
use crate::transcript::domain::transcript_store::TranscriptStore;

/// One poll cycle of the caption view: read the clock, resolve the active
/// segment, render, present.
///
/// Invoked on a fixed cadence (~100 ms) while playback is active. Each tick
/// is independent and idempotent; nothing is carried between calls, so a
/// backward seek between ticks needs no reconciliation.
pub struct SyncCaptionsUseCase {
    sink: Box<dyn CaptionSink>,
}

impl SyncCaptionsUseCase {
    pub fn new(sink: Box<dyn CaptionSink>) -> Self {
        Self { sink }
    }

    /// Returns the index of the active segment, if any.
    pub fn tick(&mut self, clock: &dyn PlaybackClock, store: &TranscriptStore) -> Option<usize> {
        let position = clock.position();
        let active = CaptionMapper::resolve(position, store.all());
        let lines = CaptionMapper::render(store.all(), active);
        self.sink.present(&lines);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::domain::caption_mapper::CaptionLine;
    use crate::transcript::domain::segment::TranscriptSegment;
    use std::sync::{Arc, Mutex};

    struct FixedClock(f64);

    impl PlaybackClock for FixedClock {
        fn position(&self) -> f64 {
            self.0
        }
    }

    struct CapturingSink {
        presented: Arc<Mutex<Vec<Vec<CaptionLine>>>>,
    }

    impl CaptionSink for CapturingSink {
        fn present(&mut self, lines: &[CaptionLine]) {
            self.presented.lock().unwrap().push(lines.to_vec());
        }
    }

    fn store_with(segments: Vec<TranscriptSegment>) -> TranscriptStore {
        let mut store = TranscriptStore::new();
        store.load(segments);
        store
    }

    fn capture() -> (CapturingSink, Arc<Mutex<Vec<Vec<CaptionLine>>>>) {
        let presented = Arc::new(Mutex::new(Vec::new()));
        (
            CapturingSink {
                presented: presented.clone(),
            },
            presented,
        )
    }

    #[test]
    fn test_tick_highlights_active_segment() {
        let store = store_with(vec![
            TranscriptSegment::new(0.0, 2.0, "hello"),
            TranscriptSegment::new(2.0, 4.0, "world"),
        ]);
        let (sink, presented) = capture();
        let mut uc = SyncCaptionsUseCase::new(Box::new(sink));

        let active = uc.tick(&FixedClock(3.0), &store);
        assert_eq!(active, Some(1));

        let lines = presented.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(!lines[0][0].active);
        assert!(lines[0][1].active);
    }

    #[test]
    fn test_tick_in_gap_presents_full_transcript_unhighlighted() {
        let store = store_with(vec![
            TranscriptSegment::new(0.0, 1.0, "a"),
            TranscriptSegment::new(3.0, 4.0, "b"),
        ]);
        let (sink, presented) = capture();
        let mut uc = SyncCaptionsUseCase::new(Box::new(sink));

        assert_eq!(uc.tick(&FixedClock(2.0), &store), None);

        let lines = presented.lock().unwrap();
        assert_eq!(lines[0].len(), 2);
        assert!(lines[0].iter().all(|l| !l.active));
    }

    #[test]
    fn test_tick_empty_store_presents_empty_display() {
        let store = TranscriptStore::new();
        let (sink, presented) = capture();
        let mut uc = SyncCaptionsUseCase::new(Box::new(sink));

        assert_eq!(uc.tick(&FixedClock(0.0), &store), None);
        assert!(presented.lock().unwrap()[0].is_empty());
    }

    #[test]
    fn test_repeated_ticks_at_same_position_are_identical() {
        let store = store_with(vec![TranscriptSegment::new(0.0, 2.0, "hello")]);
        let (sink, presented) = capture();
        let mut uc = SyncCaptionsUseCase::new(Box::new(sink));

        uc.tick(&FixedClock(1.0), &store);
        uc.tick(&FixedClock(1.0), &store);

        let lines = presented.lock().unwrap();
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn test_ticks_with_decreasing_position_are_valid() {
        // User seeks backward between polls.
        let store = store_with(vec![
            TranscriptSegment::new(0.0, 2.0, "hello"),
            TranscriptSegment::new(2.0, 4.0, "world"),
        ]);
        let (sink, _presented) = capture();
        let mut uc = SyncCaptionsUseCase::new(Box::new(sink));

        assert_eq!(uc.tick(&FixedClock(3.5), &store), Some(1));
        assert_eq!(uc.tick(&FixedClock(0.5), &store), Some(0));
    }
}
