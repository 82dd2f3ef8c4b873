use chrono::NaiveDate;

use crate::entities::{BillingPeriod, TenantOccupancy};

/// Inclusive length of a date interval in days (`end - start + 1`).
pub(crate) fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Number of days in the billing period, both endpoints included.
pub fn period_days(period: &BillingPeriod) -> i64 {
    inclusive_days(period.start, period.end)
}

/// Number of days the tenant's occupancy overlaps the billing period, both
/// endpoints included. Zero if the intervals do not intersect.
pub fn overlap_days(tenant: &TenantOccupancy, period: &BillingPeriod) -> i64 {
    let overlap_start = std::cmp::max(tenant.move_in, period.start);
    let overlap_end = std::cmp::min(tenant.move_out.unwrap_or(period.end), period.end);
    if overlap_start > overlap_end {
        0
    } else {
        inclusive_days(overlap_start, overlap_end)
    }
}

/// Month-level activity check used by the prepayment reconciler. Boundaries
/// are inclusive: moving in on the last day or out on the first day of a
/// month still counts that month.
pub fn is_active_in_month(
    move_in: Option<NaiveDate>,
    move_out: Option<NaiveDate>,
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> bool {
    move_in.map_or(true, |d| d <= month_end) && move_out.map_or(true, |d| d >= month_start)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tenant(move_in: NaiveDate, move_out: Option<NaiveDate>) -> TenantOccupancy {
        TenantOccupancy::new("t", "u", Decimal::ONE, move_in, move_out)
    }

    fn year_2023() -> BillingPeriod {
        BillingPeriod::new(date(2023, 1, 1), date(2023, 12, 31))
    }

    #[test]
    fn full_year_occupancy_counts_every_day() {
        let t = tenant(date(2020, 5, 1), None);
        assert_eq!(overlap_days(&t, &year_2023()), 365);
        assert_eq!(period_days(&year_2023()), 365);
    }

    #[test]
    fn move_in_on_first_of_month_counts_inclusively() {
        let t = tenant(date(2023, 7, 1), None);
        assert_eq!(overlap_days(&t, &year_2023()), 184);
    }

    #[test]
    fn move_out_is_inclusive() {
        let t = tenant(date(2022, 1, 1), Some(date(2023, 1, 31)));
        assert_eq!(overlap_days(&t, &year_2023()), 31);
    }

    #[test]
    fn disjoint_occupancy_has_no_overlap() {
        let before = tenant(date(2021, 1, 1), Some(date(2022, 12, 31)));
        let after = tenant(date(2024, 1, 1), None);
        assert_eq!(overlap_days(&before, &year_2023()), 0);
        assert_eq!(overlap_days(&after, &year_2023()), 0);
    }

    #[test]
    fn single_day_period() {
        let period = BillingPeriod::new(date(2023, 3, 1), date(2023, 3, 1));
        assert_eq!(overlap_days(&tenant(date(2023, 3, 1), None), &period), 1);
        assert_eq!(overlap_days(&tenant(date(2023, 3, 2), None), &period), 0);
        assert_eq!(period_days(&period), 1);
    }

    #[test]
    fn month_activity_uses_inclusive_boundaries() {
        let (start, end) = (date(2023, 3, 1), date(2023, 3, 31));
        assert!(is_active_in_month(None, None, start, end));
        assert!(is_active_in_month(Some(date(2023, 3, 31)), None, start, end));
        assert!(is_active_in_month(None, Some(date(2023, 3, 1)), start, end));
        assert!(!is_active_in_month(Some(date(2023, 4, 1)), None, start, end));
        assert!(!is_active_in_month(None, Some(date(2023, 2, 28)), start, end));
    }
}
