//! Year input validation for the form and the API.

use takwim_core::config::CalendarConfig;
use takwim_core::error::CoreError;

use crate::error::AppResult;

/// Message shown to the user for a missing, malformed or out-of-range year.
pub const INVALID_YEAR_MESSAGE: &str = "Invalid year selected";

/// ## Summary
/// Parses a submitted year and checks it against the configured bound.
///
/// ## Errors
/// Returns `CoreError::ValidationError` if the value is missing, not an integer,
/// or outside `calendar.min_year..=calendar.max_year`.
pub fn parse_year(raw: Option<&str>, calendar: &CalendarConfig) -> AppResult<i32> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CoreError::ValidationError("year is required".to_string()))?;
    let year = raw.parse::<i32>().map_err(|_err| {
        CoreError::ValidationError(format!("year '{raw}' is not a whole number"))
    })?;
    check_year(year, calendar)
}

/// ## Summary
/// Checks a year against the configured bound.
///
/// ## Errors
/// Returns `CoreError::ValidationError` if the year is out of bounds.
pub fn check_year(year: i32, calendar: &CalendarConfig) -> AppResult<i32> {
    if calendar.contains_year(year) {
        Ok(year)
    } else {
        Err(CoreError::ValidationError(format!(
            "year {year} is outside {}..={}",
            calendar.min_year, calendar.max_year
        ))
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn calendar_config() -> CalendarConfig {
        CalendarConfig {
            min_year: 2020,
            max_year: 2100,
            default_year: None,
            year_choices: 5,
            school_holidays: true,
            holidays_file: None,
        }
    }

    #[test]
    fn test_parse_year_accepts_bounds() {
        let cfg = calendar_config();
        assert_eq!(parse_year(Some("2020"), &cfg).unwrap(), 2020);
        assert_eq!(parse_year(Some(" 2100 "), &cfg).unwrap(), 2100);
    }

    #[test]
    fn test_parse_year_rejects_bad_input() {
        let cfg = calendar_config();
        for raw in [
            None,
            Some(""),
            Some("abc"),
            Some("2026abc"),
            Some("2026.5"),
            Some("2019"),
            Some("2101"),
        ] {
            let err = parse_year(raw, &cfg).unwrap_err();
            assert!(
                matches!(err, AppError::CoreError(CoreError::ValidationError(_))),
                "{raw:?}"
            );
            assert_eq!(err.status_code(), salvo::http::StatusCode::BAD_REQUEST);
        }
    }
}
