use std::path::Path;

use ffmpeg_next::media;

use crate::media::domain::media_probe::{MediaInfo, MediaProbe};

/// Reads container duration and stream layout with ffmpeg-next.
pub struct FfmpegProbe;

impl MediaProbe for FfmpegProbe {
    fn probe(&self, path: &Path) -> Result<MediaInfo, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let ictx = ffmpeg_next::format::input(path)?;

        // Container duration is reported in AV_TIME_BASE units; unknown
        // durations come back negative.
        let raw = ictx.duration();
        let duration_secs = if raw > 0 {
            raw as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            0.0
        };
        let has_audio = ictx.streams().best(media::Type::Audio).is_some();

        Ok(MediaInfo {
            duration_secs,
            has_audio,
        })
    }
}
