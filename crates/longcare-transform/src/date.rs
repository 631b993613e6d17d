//! Contract date formatting.
//!
//! Contract dates arrive as integers such as `20230615`. Formatting is purely
//! positional: no calendar validation is applied, so `20231332` becomes
//! `2023-13-32`.

/// Formats an 8-digit `YYYYMMDD` integer as `YYYY-MM-DD`.
///
/// Returns an empty string when the value is absent or zero, or when its
/// decimal representation is not exactly eight characters long.
pub fn format_date(value: Option<i64>) -> String {
    let Some(value) = value.filter(|value| *value != 0) else {
        return String::new();
    };
    let digits = value.to_string();
    if digits.len() != 8 {
        return String::new();
    }
    format!("{}-{}-{}", &digits[0..4], &digits[4..6], &digits[6..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_eight_digit_dates() {
        assert_eq!(format_date(Some(20230615)), "2023-06-15");
        assert_eq!(format_date(Some(20221231)), "2022-12-31");
    }

    #[test]
    fn degrades_to_empty() {
        assert_eq!(format_date(Some(0)), "");
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some(123)), "");
        assert_eq!(format_date(Some(202306150)), "");
    }

    #[test]
    fn does_not_validate_calendar() {
        assert_eq!(format_date(Some(20231332)), "2023-13-32");
    }

    #[test]
    fn keeps_sign_in_digit_count() {
        assert_eq!(format_date(Some(-20230615)), "");
        assert_eq!(format_date(Some(-2023061)), "-202-30-61");
    }
}
