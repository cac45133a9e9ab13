use chrono::NaiveDate;

use crate::error::FetchError;

/// Epoch bounds of a calendar year, UTC: (Jan 1 of `year`, Jan 1 of `year+1`).
/// Both ends must be representable dates or the whole request is rejected
/// before any HTTP call.
pub fn year_bounds(year: i32) -> Result<(i64, i64), FetchError> {
    let start = year_start(year).ok_or(FetchError::Year(year))?;
    let end = year
        .checked_add(1)
        .and_then(year_start)
        .ok_or(FetchError::Year(year))?;
    Ok((start, end))
}

fn year_start(year: i32) -> Option<i64> {
    Some(
        NaiveDate::from_ymd_opt(year, 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_for_2021() {
        let (after, before) = year_bounds(2021).unwrap();
        assert_eq!(after, 1609459200); // 2021-01-01T00:00:00Z
        assert_eq!(before, 1640995200); // 2022-01-01T00:00:00Z
    }

    #[test]
    fn bounds_are_one_year_apart_for_non_leap_year() {
        let (after, before) = year_bounds(2019).unwrap();
        assert_eq!(before - after, 365 * 86400);
    }

    #[test]
    fn leap_year_is_longer() {
        let (after, before) = year_bounds(2020).unwrap();
        assert_eq!(before - after, 366 * 86400);
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        assert!(matches!(year_bounds(300_000), Err(FetchError::Year(_))));
        assert!(matches!(year_bounds(i32::MAX), Err(FetchError::Year(_))));
    }
}
