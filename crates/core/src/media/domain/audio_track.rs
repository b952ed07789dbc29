/// Mono PCM decoded from a media file's audio stream, normalized to [-1, 1].
///
/// Readers downmix to a single channel at the requested rate, which is the
/// shape speech recognizers consume.
#[derive(Clone, Debug)]
pub struct AudioTrack {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioTrack {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fields() {
        let track = AudioTrack::new(vec![0.0; 16000], 16000);
        assert_eq!(track.samples().len(), 16000);
        assert_eq!(track.sample_rate(), 16000);
    }

    #[test]
    fn test_duration() {
        let track = AudioTrack::new(vec![0.0; 48000], 16000);
        assert_relative_eq!(track.duration_secs(), 3.0);
    }

    #[test]
    fn test_into_samples() {
        let track = AudioTrack::new(vec![0.25, -0.5], 16000);
        assert_eq!(track.into_samples(), vec![0.25, -0.5]);
    }
}
