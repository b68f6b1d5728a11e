//! Small pure display-formatting helpers shared by the TUI widgets.

/// Format elapsed whole seconds as `MM:SS`. Minutes are not capped, so a
/// long run shows e.g. `125:07`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `made/attempts` shooting split, e.g. `3/7`.
pub fn format_split(made: u32, attempts: u32) -> String {
    format!("{}/{}", made, attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_zero() {
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_format_clock_pads_both_fields() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_format_clock_long_games() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(7507), "125:07");
    }

    #[test]
    fn test_format_split() {
        assert_eq!(format_split(3, 7), "3/7");
        assert_eq!(format_split(0, 0), "0/0");
    }
}
