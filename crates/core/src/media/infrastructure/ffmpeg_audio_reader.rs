use std::path::Path;

use ffmpeg_next::format::sample::Type as SampleType;
use ffmpeg_next::format::Sample;
use ffmpeg_next::frame::Audio as AudioFrame;
use ffmpeg_next::software::resampling;
use ffmpeg_next::{codec, media, ChannelLayout};

use crate::media::domain::audio_reader::AudioReader;
use crate::media::domain::audio_track::AudioTrack;

/// Decodes a media file's audio stream with ffmpeg-next, downmixing to mono
/// at the requested rate.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioTrack>, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let mut ictx = ffmpeg_next::format::input(path)?;
        let stream = match ictx.streams().best(media::Type::Audio) {
            Some(s) => s,
            None => return Ok(None),
        };
        let stream_index = stream.index();

        let mut decoder = codec::context::Context::from_parameters(stream.parameters())?
            .decoder()
            .audio()?;
        let mut resampler = resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            Sample::F32(SampleType::Planar),
            ChannelLayout::MONO,
            target_sample_rate,
        )?;

        let mut samples: Vec<f32> = Vec::new();
        let mut decoded = AudioFrame::empty();
        let mut resampled = AudioFrame::empty();

        for (s, packet) in ictx.packets() {
            if s.index() != stream_index {
                continue;
            }
            decoder.send_packet(&packet)?;
            drain_decoder(
                &mut decoder,
                &mut resampler,
                &mut decoded,
                &mut resampled,
                &mut samples,
            )?;
        }

        decoder.send_eof()?;
        drain_decoder(
            &mut decoder,
            &mut resampler,
            &mut decoded,
            &mut resampled,
            &mut samples,
        )?;

        // The resampler may still hold buffered output
        if let Ok(Some(delay)) = resampler.flush(&mut resampled) {
            if delay.output > 0 {
                append_plane(&resampled, &mut samples);
            }
        }

        Ok(Some(AudioTrack::new(samples, target_sample_rate)))
    }
}

fn drain_decoder(
    decoder: &mut ffmpeg_next::decoder::Audio,
    resampler: &mut resampling::Context,
    decoded: &mut AudioFrame,
    resampled: &mut AudioFrame,
    out: &mut Vec<f32>,
) -> Result<(), ffmpeg_next::Error> {
    while decoder.receive_frame(decoded).is_ok() {
        resampler.run(decoded, resampled)?;
        append_plane(resampled, out);
    }
    Ok(())
}

/// Append the single plane of a mono planar f32 frame.
fn append_plane(frame: &AudioFrame, out: &mut Vec<f32>) {
    let count = frame.samples();
    if count == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, count) };
    out.extend_from_slice(floats);
}
