/// Whisper expects 16 kHz mono input.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Caption poll cadence while playback is active.
pub const CAPTION_POLL_INTERVAL_MS: u64 = 100;

pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov"];

pub const SUBTITLE_EXTENSION: &str = "srt";
