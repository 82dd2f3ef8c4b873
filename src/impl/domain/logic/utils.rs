use chrono::{Datelike, Duration, NaiveDate};

/// Returns the first day of the month of the given date.
pub(crate) fn month_start_date(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Returns the first day of the following month.
pub(crate) fn next_month_start(date: NaiveDate) -> NaiveDate {
    let month_start = month_start_date(date);
    // Day 1 plus 32 days always lands in the next month.
    month_start_date(month_start + Duration::days(32))
}

/// Returns the last day of the month of the given date.
pub(crate) fn month_end_date(date: NaiveDate) -> NaiveDate {
    next_month_start(date) - Duration::days(1)
}

/// Calendar month of a date as a comparable (year, month) pair.
pub(crate) fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Calendar months touched by `[start, end]`, as (month start, month end)
/// pairs: from the month containing `start` through the month containing
/// `end`. Empty if `start > end`.
pub(crate) fn calendar_months(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut months = Vec::new();
    let mut current = month_start_date(start);
    while current <= end {
        months.push((current, month_end_date(current)));
        current = next_month_start(current);
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(month_start_date(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(month_end_date(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(month_end_date(date(2023, 12, 31)), date(2023, 12, 31));
        assert_eq!(next_month_start(date(2023, 12, 31)), date(2024, 1, 1));
        assert_eq!(next_month_start(date(2023, 1, 31)), date(2023, 2, 1));
    }

    #[test]
    fn calendar_months_cover_partial_months() {
        let months = calendar_months(date(2023, 7, 15), date(2024, 2, 3));
        assert_eq!(months.len(), 8);
        assert_eq!(months[0], (date(2023, 7, 1), date(2023, 7, 31)));
        assert_eq!(months[7], (date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn calendar_months_of_inverted_range_is_empty() {
        assert!(calendar_months(date(2023, 3, 1), date(2023, 2, 1)).is_empty());
    }
}
