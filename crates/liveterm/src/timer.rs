//! Elapsed-time suffix for live regions.

use std::time::Duration;

/// Rounds `elapsed` to the nearest multiple of `factor`, halfway values
/// rounding up. A zero factor leaves the duration untouched.
pub fn round_duration(elapsed: Duration, factor: Duration) -> Duration {
    let factor_nanos = factor.as_nanos();
    if factor_nanos == 0 {
        return elapsed;
    }
    let nanos = elapsed.as_nanos();
    let remainder = nanos % factor_nanos;
    let rounded = if remainder * 2 < factor_nanos {
        nanos - remainder
    } else {
        nanos + (factor_nanos - remainder)
    };
    duration_from_nanos(rounded)
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

/// Formats a duration compactly: `0s`, `250ms`, `1.5s`, `2m5s`, `1h0m3s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.is_zero() {
        return "0s".to_string();
    }
    if elapsed < Duration::from_secs(1) {
        let nanos = elapsed.subsec_nanos();
        return if nanos % 1_000_000 == 0 {
            format!("{}ms", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            format!("{}µs", nanos / 1_000)
        } else {
            format!("{}ns", nanos)
        };
    }

    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut secs = seconds.to_string();
    let fraction = elapsed.subsec_nanos();
    if fraction > 0 {
        let digits = format!("{:09}", fraction);
        secs.push('.');
        secs.push_str(digits.trim_end_matches('0'));
    }

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// The ` (elapsed)` text shown after the message.
pub(crate) fn timer_suffix(elapsed: Duration, rounding: Duration) -> String {
    format!(" ({})", format_elapsed(round_duration(elapsed, rounding)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_seconds() {
        let s = Duration::from_secs(1);
        assert_eq!(round_duration(Duration::from_millis(1400), s), s);
        assert_eq!(
            round_duration(Duration::from_millis(1500), s),
            Duration::from_secs(2)
        );
        assert_eq!(
            round_duration(Duration::from_millis(300), s),
            Duration::ZERO
        );
    }

    #[test]
    fn test_round_zero_factor() {
        let d = Duration::from_micros(1234);
        assert_eq!(round_duration(d, Duration::ZERO), d);
    }

    #[test]
    fn test_round_to_milliseconds() {
        let factor = Duration::from_millis(200);
        assert_eq!(
            round_duration(Duration::from_millis(1290), factor),
            Duration::from_millis(1200)
        );
        assert_eq!(
            round_duration(Duration::from_millis(1300), factor),
            Duration::from_millis(1400)
        );
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0s");
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
        assert_eq!(format_elapsed(Duration::from_micros(1500)), "1500µs");
        assert_eq!(format_elapsed(Duration::from_secs(3)), "3s");
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m5s");
        assert_eq!(format_elapsed(Duration::from_secs(3603)), "1h0m3s");
    }

    #[test]
    fn test_timer_suffix() {
        assert_eq!(
            timer_suffix(Duration::from_millis(2600), Duration::from_secs(1)),
            " (3s)"
        );
    }
}
