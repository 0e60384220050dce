//! SubRip (`.srt`) serialization for generated subtitles.

use std::fmt::Write;

use crate::types::Subtitle;

/// Format seconds as `HH:MM:SS,mmm`.
///
/// Negative and non-finite inputs clamp to zero. Hours are not wrapped.
pub fn format_timestamp(seconds: f64) -> String {
    let s = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let ms_total = (s * 1000.0).round() as u64;
    let ms = ms_total % 1000;
    let total_sec = ms_total / 1000;
    let sec = total_sec % 60;
    let total_min = total_sec / 60;
    let min = total_min % 60;
    let hour = total_min / 60;
    format!("{:02}:{:02}:{:02},{:03}", hour, min, sec, ms)
}

/// Serialize cues in order, numbering them from 1.
///
/// Every entry ends with a blank line, including the last one.
pub fn to_srt(subtitles: &[Subtitle]) -> String {
    let mut out = String::new();
    for (idx, cue) in subtitles.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
            format_timestamp(cue.start),
            format_timestamp(cue.end),
            cue.text
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start: f64, end: f64, text: &str) -> Subtitle {
        Subtitle {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(3725.4), "01:02:05,400");
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_timestamp(59.999), "00:00:59,999");
        assert_eq!(format_timestamp(2.3), "00:00:02,300");
    }

    #[test]
    fn test_format_timestamp_edges() {
        assert_eq!(format_timestamp(-4.0), "00:00:00,000");
        assert_eq!(format_timestamp(f64::NAN), "00:00:00,000");
        assert_eq!(format_timestamp(360_000.0), "100:00:00,000");
    }

    #[test]
    fn test_to_srt() {
        let subtitles = vec![cue(0.0, 1.5, "Hi"), cue(1.5, 3.0, "Bye")];
        assert_eq!(
            to_srt(&subtitles),
            "1\n00:00:00,000 --> 00:00:01,500\nHi\n\n2\n00:00:01,500 --> 00:00:03,000\nBye\n\n"
        );
    }

    #[test]
    fn test_to_srt_empty() {
        assert_eq!(to_srt(&[]), "");
    }
}
