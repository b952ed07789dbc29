/// Elapsed-time label for caption lines: `H:MM:SS`, truncated to whole
/// seconds. Negative inputs clamp to zero.
pub fn format_elapsed(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
