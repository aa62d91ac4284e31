//! Property-based tests for the run-time codec

use super::*;
use proptest::prelude::*;

/// Property-based test generators
mod generators {
    use super::*;

    /// Field values as they appear in recorded run times
    pub fn fields() -> impl Strategy<Value = (u64, u64, u64, u64)> {
        (0u64..100, 0u64..120, 0u64..120, 0u64..5000)
    }

    /// Arbitrary text that is unlikely to be a valid run time
    pub fn garbage() -> impl Strategy<Value = String> {
        "[a-z :.+-]{0,20}"
    }
}

proptest! {
    #[test]
    fn prop_parse_is_weighted_sum((h, m, s, ms) in generators::fields()) {
        let input = format!("{}:{}:{}:{}", h, m, s, ms);
        let parsed = parse(&input).unwrap();
        prop_assert_eq!(parsed.as_millis(), h * 3_600_000 + m * 60_000 + s * 1_000 + ms);
    }

    #[test]
    fn prop_zero_padding_is_irrelevant((h, m, s, ms) in generators::fields()) {
        let plain = format!("{}:{}:{}:{}", h, m, s, ms);
        let padded = format!("{:02}:{:02}:{:02}:{:03}", h, m, s, ms);
        prop_assert_eq!(parse(&plain).unwrap(), parse(&padded).unwrap());
    }

    #[test]
    fn prop_format_components_are_in_range(ms in 0u64..10_000_000_000) {
        let text = format(DurationMs::from_millis(ms));
        let re = regex::Regex::new(r"^(\d+)m (\d+)s (\d+)ms$").unwrap();
        let caps = re.captures(&text).unwrap();
        prop_assert!(caps[1].parse::<u64>().unwrap() < 60);
        prop_assert!(caps[2].parse::<u64>().unwrap() < 60);
        prop_assert!(caps[3].parse::<u64>().unwrap() < 1000);
    }

    #[test]
    fn prop_format_round_trips_below_one_hour(ms in 0u64..3_600_000) {
        let text = format(DurationMs::from_millis(ms));
        let re = regex::Regex::new(r"^(\d+)m (\d+)s (\d+)ms$").unwrap();
        let caps = re.captures(&text).unwrap();
        let rebuilt = format!("00:{}:{}:{}", &caps[1], &caps[2], &caps[3]);
        prop_assert_eq!(parse(&rebuilt).unwrap().as_millis(), ms);
    }

    #[test]
    fn prop_extended_matches_compatible_below_one_hour(ms in 0u64..3_600_000) {
        let duration = DurationMs::from_millis(ms);
        prop_assert_eq!(format(duration), format_extended(duration));
    }

    #[test]
    fn prop_wrong_field_count_is_rejected(parts in proptest::collection::vec(0u64..100, 0..8)) {
        prop_assume!(parts.len() != 4);
        let input = parts.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(":");
        let is_field_count_error = matches!(parse(&input), Err(FormatError::FieldCount { .. }));
        prop_assert!(is_field_count_error);
    }

    #[test]
    fn prop_garbage_never_panics(input in generators::garbage()) {
        let _ = parse(&input);
    }
}
