//! Ordinal percentile formatting.

/// English ordinal suffix, with the 11th-13th irregular cases.
#[must_use]
pub fn ordinal_suffix(value: u32) -> &'static str {
    match value % 100 {
        11..=13 => "th",
        _ => match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Display policy for percentile fields: a positive value renders with its
/// ordinal suffix; zero or absent renders as "N/A", never "0th".
#[must_use]
pub fn percentile_display(value: Option<u8>) -> String {
    match value {
        Some(v) if v > 0 => format!("{v}{}", ordinal_suffix(u32::from(v))),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_and_irregular_suffixes() {
        assert_eq!(percentile_display(Some(1)), "1st");
        assert_eq!(percentile_display(Some(2)), "2nd");
        assert_eq!(percentile_display(Some(3)), "3rd");
        assert_eq!(percentile_display(Some(4)), "4th");
        assert_eq!(percentile_display(Some(11)), "11th");
        assert_eq!(percentile_display(Some(12)), "12th");
        assert_eq!(percentile_display(Some(13)), "13th");
        assert_eq!(percentile_display(Some(21)), "21st");
        assert_eq!(percentile_display(Some(22)), "22nd");
        assert_eq!(percentile_display(Some(100)), "100th");
    }

    #[test]
    fn zero_and_absent_render_not_applicable() {
        assert_eq!(percentile_display(Some(0)), "N/A");
        assert_eq!(percentile_display(None), "N/A");
    }
}
