use std::time::Instant;

use crate::playback::domain::playback_clock::PlaybackClock;

/// Wall-clock-backed playback position with play/pause/seek.
///
/// Stands in for a media player's clock behind the `PlaybackClock` seam:
/// the position advances in real time while playing and holds steady while
/// paused.
#[derive(Debug, Default)]
pub struct TimerPlaybackClock {
    /// Position accumulated up to the last pause or seek.
    base: f64,
    /// Set while playing; elapsed time since is added to `base`.
    started: Option<Instant>,
}

impl TimerPlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(at) = self.started.take() {
            self.base += at.elapsed().as_secs_f64();
        }
    }

    /// Jump to `position` (clamped to zero), preserving the play/pause state.
    pub fn seek(&mut self, position: f64) {
        self.base = position.max(0.0);
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started.is_some()
    }
}

impl PlaybackClock for TimerPlaybackClock {
    fn position(&self) -> f64 {
        let running = self
            .started
            .map(|at| at.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        self.base + running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_starts_paused_at_zero() {
        let clock = TimerPlaybackClock::new();
        assert!(!clock.is_playing());
        assert_eq!(clock.position(), 0.0);
    }

    #[test]
    fn test_seek_while_paused_is_exact() {
        let mut clock = TimerPlaybackClock::new();
        clock.seek(42.5);
        assert_eq!(clock.position(), 42.5);
    }

    #[test]
    fn test_seek_clamps_negative_to_zero() {
        let mut clock = TimerPlaybackClock::new();
        clock.seek(-3.0);
        assert_eq!(clock.position(), 0.0);
    }

    #[test]
    fn test_play_advances_position() {
        let mut clock = TimerPlaybackClock::new();
        clock.play();
        assert!(clock.is_playing());
        thread::sleep(Duration::from_millis(20));
        assert!(clock.position() > 0.0);
    }

    #[test]
    fn test_pause_holds_position() {
        let mut clock = TimerPlaybackClock::new();
        clock.play();
        thread::sleep(Duration::from_millis(10));
        clock.pause();
        let held = clock.position();
        thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.position(), held);
    }

    #[test]
    fn test_seek_backward_while_playing() {
        let mut clock = TimerPlaybackClock::new();
        clock.seek(10.0);
        clock.play();
        clock.seek(2.0);
        assert!(clock.is_playing());
        let pos = clock.position();
        assert!((2.0..3.0).contains(&pos), "position was {pos}");
    }

    #[test]
    fn test_play_twice_does_not_reset() {
        let mut clock = TimerPlaybackClock::new();
        clock.play();
        thread::sleep(Duration::from_millis(10));
        clock.play();
        assert!(clock.position() > 0.0);
    }
}
