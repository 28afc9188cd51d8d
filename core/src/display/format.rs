//! Countdown text formatting.

/// Format remaining seconds as `M:SS` with a half-second flashing separator.
///
/// The separator is `:` on the second half of each wall-clock second and `~`
/// (a dimmer glyph on the matrix font) on the first half, so it flashes in
/// lock-step with the scheduler's half-second cadence. A finished timer
/// (0:00) holds a steady `:`, as does any display with flashing disabled —
/// the secondary timer always renders that way so the two are visually
/// distinguishable.
///
/// Minutes are space-padded (blank at zero); seconds are always two digits.
pub fn format_remaining(remaining: f64, flash_colon_disabled: bool) -> String {
    let remaining = remaining.max(0.0);
    let half_second = remaining % 1.0 >= 0.5;

    let total = remaining as u64;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    let separator = if half_second || (minutes == 0 && seconds == 0) || flash_colon_disabled {
        ':'
    } else {
        '~'
    };

    let minutes_text = match minutes {
        0 => "  ".to_string(),
        1..=9 => format!(" {minutes}"),
        _ => minutes.to_string(),
    };

    format!("{minutes_text}{separator}{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::format_remaining;

    #[test]
    fn first_half_second_shows_dim_separator() {
        assert_eq!(format_remaining(90.1, false), " 1~30");
    }

    #[test]
    fn second_half_second_shows_colon() {
        assert_eq!(format_remaining(90.6, false), " 1:30");
    }

    #[test]
    fn finished_timer_holds_steady_colon() {
        assert_eq!(format_remaining(0.0, false), "  :00");
        assert_eq!(format_remaining(0.2, false), "  :00");
    }

    #[test]
    fn flash_disabled_always_colon() {
        assert_eq!(format_remaining(90.1, true), " 1:30");
        assert_eq!(format_remaining(45.2, true), "  :45");
    }

    #[test]
    fn zero_minutes_renders_blank() {
        assert_eq!(format_remaining(45.7, false), "  :45");
        assert_eq!(format_remaining(45.2, false), "  ~45");
    }

    #[test]
    fn two_digit_minutes_unpadded() {
        assert_eq!(format_remaining(600.6, false), "10:00");
    }

    #[test]
    fn minutes_wrap_at_the_hour() {
        // 62 minutes shows as 2 minutes; the deployment has no hours digits.
        assert_eq!(format_remaining(3720.9, false), " 2:00");
    }

    #[test]
    fn negative_remaining_clamps_to_zero() {
        assert_eq!(format_remaining(-3.0, false), "  :00");
    }
}
