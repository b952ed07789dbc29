use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::transcript::domain::segment::TranscriptSegment;

#[derive(Error, Debug)]
pub enum SrtParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cue {cue}: malformed timing line '{line}'")]
    BadTiming { cue: usize, line: String },
}

/// Write segments as a SubRip (.srt) file.
pub fn write_srt(segments: &[TranscriptSegment], path: &Path) -> std::io::Result<()> {
    let mut out = String::new();
    for (idx, seg) in segments.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
            srt_timestamp(seg.start_time),
            srt_timestamp(seg.end_time),
            seg.text
        ));
    }
    fs::write(path, out)
}

/// Parse a SubRip file into segments, in file order.
///
/// Accepts CRLF and LF line endings and multi-line cue text; cue index
/// lines are optional. A timing line that doesn't parse is an error naming
/// the offending cue.
pub fn parse_srt(path: &Path) -> Result<Vec<TranscriptSegment>, SrtParseError> {
    let raw = fs::read_to_string(path).map_err(|e| SrtParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_srt_str(&raw)
}

pub fn parse_srt_str(raw: &str) -> Result<Vec<TranscriptSegment>, SrtParseError> {
    let normalized = raw.replace("\r\n", "\n");
    let mut segments = Vec::new();

    for block in normalized.split("\n\n") {
        let mut lines = block.lines().filter(|l| !l.trim().is_empty()).peekable();

        // Optional cue index line
        if let Some(first) = lines.peek() {
            if first.trim().parse::<u64>().is_ok() {
                lines.next();
            }
        }

        let timing = match lines.next() {
            Some(l) => l,
            None => continue, // blank block (e.g. trailing separators)
        };
        let (start_time, end_time) =
            parse_timing_line(timing).ok_or_else(|| SrtParseError::BadTiming {
                cue: segments.len() + 1,
                line: timing.to_string(),
            })?;

        let text = lines.collect::<Vec<_>>().join("\n");
        segments.push(TranscriptSegment::new(start_time, end_time, text));
    }

    Ok(segments)
}

fn parse_timing_line(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once("-->")?;
    Some((
        parse_srt_timestamp(start.trim())?,
        parse_srt_timestamp(end.trim())?,
    ))
}

/// `HH:MM:SS,mmm` (a `.` millisecond separator is tolerated).
fn parse_srt_timestamp(s: &str) -> Option<f64> {
    let mut parts = s.splitn(3, ':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let rest = parts.next()?;
    let (secs, millis) = match rest.split_once([',', '.']) {
        Some((s, m)) => (s.parse::<u64>().ok()?, m.parse::<u64>().ok()?),
        None => (rest.parse::<u64>().ok()?, 0),
    };
    Some((hours * 3600 + minutes * 60 + secs) as f64 + millis as f64 / 1000.0)
}

fn srt_timestamp(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let millis = total_ms % 1000;
    let seconds = (total_ms / 1000) % 60;
    let minutes = (total_ms / 60_000) % 60;
    let hours = total_ms / 3_600_000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_srt_timestamp_format() {
        assert_eq!(srt_timestamp(0.0), "00:00:00,000");
        assert_eq!(srt_timestamp(61.5), "00:01:01,500");
        assert_eq!(srt_timestamp(3723.042), "01:02:03,042");
    }

    #[test]
    fn test_write_srt_format() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.srt");
        let segments = vec![
            TranscriptSegment::new(0.0, 2.0, "hello"),
            TranscriptSegment::new(2.0, 4.5, "world"),
        ];
        write_srt(&segments, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "1\n00:00:00,000 --> 00:00:02,000\nhello\n\n\
             2\n00:00:02,000 --> 00:00:04,500\nworld\n\n"
        );
    }

    #[test]
    fn test_parse_simple() {
        let raw = "1\n00:00:00,000 --> 00:00:02,000\nhello\n\n2\n00:00:02,000 --> 00:00:04,000\nworld\n";
        let segments = parse_srt_str(raw).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], TranscriptSegment::new(0.0, 2.0, "hello"));
        assert_eq!(segments[1].text, "world");
    }

    #[test]
    fn test_parse_crlf() {
        let raw = "1\r\n00:00:01,500 --> 00:00:03,000\r\nhi there\r\n\r\n";
        let segments = parse_srt_str(raw).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_time, 1.5);
        assert_eq!(segments[0].text, "hi there");
    }

    #[test]
    fn test_parse_multiline_cue_text() {
        let raw = "1\n00:00:00,000 --> 00:00:02,000\nline one\nline two\n";
        let segments = parse_srt_str(raw).unwrap();
        assert_eq!(segments[0].text, "line one\nline two");
    }

    #[test]
    fn test_parse_missing_index_line() {
        let raw = "00:00:00,000 --> 00:00:01,000\nno index\n";
        let segments = parse_srt_str(raw).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "no index");
    }

    #[test]
    fn test_parse_dot_millisecond_separator() {
        let raw = "1\n00:00:00.250 --> 00:00:01.750\ndotted\n";
        let segments = parse_srt_str(raw).unwrap();
        assert_eq!(segments[0].start_time, 0.25);
        assert_eq!(segments[0].end_time, 1.75);
    }

    #[test]
    fn test_parse_malformed_timing_is_error() {
        let raw = "1\nnot a timing line\ntext\n";
        let err = parse_srt_str(raw).unwrap_err();
        assert!(matches!(err, SrtParseError::BadTiming { cue: 1, .. }));
    }

    #[test]
    fn test_parse_missing_file_is_io_error() {
        let err = parse_srt(Path::new("/nonexistent/subs.srt")).unwrap_err();
        assert!(matches!(err, SrtParseError::Io { .. }));
    }

    #[test]
    fn test_write_then_parse_preserves_segments() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("round.srt");
        let segments = vec![TranscriptSegment::new(1.25, 3.5, "kept intact")];
        write_srt(&segments, &path).unwrap();
        assert_eq!(parse_srt(&path).unwrap(), segments);
    }
}
