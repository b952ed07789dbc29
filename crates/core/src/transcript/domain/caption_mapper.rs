use super::segment::TranscriptSegment;
use crate::shared::time_format::format_elapsed;

/// One display line of the transcript view.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionLine {
    /// Elapsed-time label derived from the segment start (`H:MM:SS`).
    pub label: String,
    pub text: String,
    /// Whether this line should be visually distinguished.
    pub active: bool,
}

impl CaptionLine {
    pub fn display(&self) -> String {
        format!("[{}] {}", self.label, self.text)
    }
}

/// Maps a playback position to the active segment and renders the view.
///
/// Stateless on purpose: every poll recomputes the active segment from the
/// position and the transcript, so there is no cached highlight to drift out
/// of sync and backward seeks need no special handling.
pub struct CaptionMapper;

impl CaptionMapper {
    /// Index of the first segment whose range contains `t`, inclusive on
    /// both bounds. `None` when `t` falls in a gap, before the first start,
    /// or after the last end. When segments overlap, the earliest in order
    /// wins.
    pub fn resolve(t: f64, segments: &[TranscriptSegment]) -> Option<usize> {
        segments.iter().position(|seg| seg.contains(t))
    }

    /// Render every segment as a labelled line, marking `active` (if any)
    /// as distinguished. Pure: same inputs, same output.
    pub fn render(segments: &[TranscriptSegment], active: Option<usize>) -> Vec<CaptionLine> {
        segments
            .iter()
            .enumerate()
            .map(|(idx, seg)| CaptionLine {
                label: format_elapsed(seg.start_time),
                text: seg.text.clone(),
                active: active == Some(idx),
            })
            .collect()
    }
}
