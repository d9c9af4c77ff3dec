//! Display formatting for millisecond durations.
//!
//! The decomposition always floors, matching the legacy spreadsheet
//! output digit for digit. Callers must compute deltas on raw
//! milliseconds first and only then format; rounding each side
//! independently compounds sub-second error.

/// Formats a millisecond duration as `H:MM:SS` or `MM:SS`, with a sign
/// prefix for negative input.
pub fn format_timestamp(ms: i64, include_hours: bool) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let mut delta = ms.abs() / 1000;

    let days = delta / 86400;
    delta -= days * 86400;
    let hours = (delta / 3600) % 24;
    delta -= hours * 3600;
    let minutes = (delta / 60) % 60;
    delta -= minutes * 60;
    let seconds = delta % 60;

    if include_hours {
        format!("{sign}{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{minutes:02}:{seconds:02}")
    }
}

/// Formats a comparison delta with an explicit sign, empty when the
/// encounter had no match.
pub fn format_delta(ms: Option<i64>) -> String {
    match ms {
        None => String::new(),
        Some(ms) if ms > 0 => format!("+{}", format_timestamp(ms, false)),
        Some(ms) => format_timestamp(ms, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_floor_trailing_milliseconds() {
        assert_eq!(format_timestamp(1591999, false), "26:31");
        assert_eq!(format_timestamp(1592000, false), "26:32");
        assert_eq!(format_timestamp(1591538, true), "0:26:31");
    }

    #[test]
    fn should_format_basic_durations() {
        assert_eq!(format_timestamp(0, true), "0:00:00");
        assert_eq!(format_timestamp(1000, true), "0:00:01");
        assert_eq!(format_timestamp(60000, true), "0:01:00");
        assert_eq!(format_timestamp(3661000, true), "1:01:01");
        assert_eq!(format_timestamp(3661000, false), "01:01");
    }

    #[test]
    fn should_prefix_negative_durations() {
        assert_eq!(format_timestamp(-1000, true), "-0:00:01");
        assert_eq!(format_timestamp(-60000, false), "-01:00");
    }

    #[test]
    fn should_floor_raw_deltas_not_each_operand() {
        // 750500 - 730600 = 19900ms, which floors to 19s. Rounding each
        // side to the nearest second first would have shown 20s.
        let raw_delta = 750500 - 730600;
        assert_eq!(raw_delta, 19900);
        assert_eq!(format_delta(Some(raw_delta)), "+00:19");
    }

    #[test]
    fn should_format_delta_signs() {
        assert_eq!(format_delta(Some(-5000)), "-00:05");
        assert_eq!(format_delta(Some(0)), "00:00");
        assert_eq!(format_delta(None), "");
    }
}
