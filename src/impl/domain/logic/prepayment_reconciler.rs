use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    entities::{BillingPeriod, MonthlyReconciliationEntry, PrepaymentEntry, PrepaymentSummary},
    presentation::month_label_fmt::{month_label, MonthLabelLocale},
};

use super::{
    occupancy::is_active_in_month,
    utils::{calendar_months, year_month},
};

/// Sums the advance payments (Vorauszahlungen) owed over the billing period,
/// month by month.
///
/// The schedule is a step function: each entry applies from its month until a
/// later entry supersedes it. Months in which the tenant is not in residence
/// are reported with a zero amount and excluded from the total.
///
/// When several entries fall into the same calendar month, the one with the
/// latest effective date wins; entries with the same date are resolved by
/// input order (last one wins).
pub fn reconcile_prepayments(
    period: &BillingPeriod,
    schedule: &[PrepaymentEntry],
    move_in: Option<NaiveDate>,
    move_out: Option<NaiveDate>,
    locale: MonthLabelLocale,
) -> PrepaymentSummary {
    reconcile_prepayments_for_stays(period, schedule, &[(move_in, move_out)], locale)
}

/// Like [`reconcile_prepayments`] for a tenant with several stays
/// (`(move_in, move_out)` pairs). A month is active if any stay covers it, so
/// months between two stays are not billed and overlapping stays bill a month
/// once.
pub(crate) fn reconcile_prepayments_for_stays(
    period: &BillingPeriod,
    schedule: &[PrepaymentEntry],
    stays: &[(Option<NaiveDate>, Option<NaiveDate>)],
    locale: MonthLabelLocale,
) -> PrepaymentSummary {
    let mut sorted: Vec<&PrepaymentEntry> = schedule.iter().collect();
    // Stable, so same-date entries keep their input order.
    sorted.sort_by_key(|e| e.effective_date);

    let months: Vec<MonthlyReconciliationEntry> = calendar_months(period.start, period.end)
        .into_iter()
        .map(|(month_start, month_end)| {
            let is_active_month = stays.iter().any(|&(move_in, move_out)| {
                is_active_in_month(move_in, move_out, month_start, month_end)
            });
            let amount = if is_active_month {
                amount_in_effect(&sorted, month_start)
            } else {
                Decimal::ZERO
            };
            MonthlyReconciliationEntry {
                month_label: month_label(month_start, locale),
                month_start,
                amount,
                is_active_month,
            }
        })
        .collect();

    let total = months
        .iter()
        .filter(|m| m.is_active_month)
        .map(|m| m.amount)
        .sum();

    PrepaymentSummary { total, months }
}

/// Latest entry effective in or before the month of `month_start`, scanning
/// the sorted schedule from the end.
fn amount_in_effect(sorted: &[&PrepaymentEntry], month_start: NaiveDate) -> Decimal {
    let month = year_month(month_start);
    sorted
        .iter()
        .rev()
        .find(|e| year_month(e.effective_date) <= month)
        .map_or(Decimal::ZERO, |e| e.amount)
}
