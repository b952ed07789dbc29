use crate::transcript::domain::caption_mapper::CaptionLine;

/// Domain interface for the presentation layer that shows rendered captions.
///
/// Receives the full line list every poll; actual presentation (widgets,
/// terminal output) lives entirely behind this seam.
pub trait CaptionSink {
    fn present(&mut self, lines: &[CaptionLine]);
}
