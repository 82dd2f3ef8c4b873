use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::{DistributionResult, TenantShare};

/// Rounds every share to `decimal_places`.
///
/// Without `pooled_total` each share is rounded half away from zero on its
/// own. For pooled distributions pass the distributed total as
/// `pooled_total`: shares are then apportioned by largest remainder. Every
/// share is truncated, and the units still missing to reach the rounded total
/// go one each to the shares with the largest truncated remainders (ties in
/// tenant id order). No share ever moves more than one unit away from its
/// unrounded value, so a non-negative share never rounds below zero. An
/// all-zero distribution stays all zero.
pub fn round_distribution(
    result: &DistributionResult,
    decimal_places: u32,
    pooled_total: Option<Decimal>,
) -> DistributionResult {
    let Some(total) = pooled_total else {
        return result
            .iter()
            .map(|(id, share)| {
                let amount = round_amount(share.amount, decimal_places);
                (id.clone(), TenantShare { amount })
            })
            .collect();
    };

    let mut rounded = DistributionResult::new();
    let mut remainders: Vec<(&String, Decimal)> = Vec::new();
    for (id, share) in result {
        let truncated =
            share.amount.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
        let remainder = share.amount - truncated;
        if remainder > Decimal::ZERO {
            remainders.push((id, remainder));
        }
        rounded.insert(id.clone(), TenantShare { amount: truncated });
    }
    // Stable: equal remainders keep id order.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    let unit = Decimal::new(1, decimal_places);
    let rounded_sum: Decimal = rounded.values().map(|s| s.amount).sum();
    let mut missing = round_amount(total, decimal_places) - rounded_sum;
    for (id, _) in remainders {
        if missing < unit {
            break;
        }
        if let Some(share) = rounded.get_mut(id) {
            share.amount += unit;
            missing -= unit;
        }
    }
    rounded
}

/// Commercial rounding (half away from zero) to `decimal_places`.
pub(crate) fn round_amount(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn result(shares: &[(&str, Decimal)]) -> DistributionResult {
        shares
            .iter()
            .map(|(id, amount)| (id.to_string(), TenantShare { amount: *amount }))
            .collect()
    }

    #[test]
    fn equal_remainders_go_to_first_tenant_by_id() {
        let third = dec!(100) / dec!(3);
        let r = round_distribution(
            &result(&[("a", third), ("b", third), ("c", third)]),
            2,
            Some(dec!(100)),
        );
        assert_eq!(r["a"].amount, dec!(33.34));
        assert_eq!(r["b"].amount, dec!(33.33));
        assert_eq!(r["c"].amount, dec!(33.33));
    }

    #[test]
    fn missing_cents_go_to_largest_remainders() {
        let r = round_distribution(
            &result(&[("a", dec!(10.004)), ("b", dec!(10.009)), ("c", dec!(9.987))]),
            2,
            Some(dec!(30)),
        );
        assert_eq!(r["a"].amount, dec!(10.00));
        assert_eq!(r["b"].amount, dec!(10.01));
        assert_eq!(r["c"].amount, dec!(9.99));
    }

    #[test]
    fn zero_shares_never_receive_cents() {
        let third = dec!(100) / dec!(3);
        let r = round_distribution(
            &result(&[("a", third), ("b", third), ("c", third), ("z", Decimal::ZERO)]),
            2,
            Some(dec!(100)),
        );
        assert_eq!(r["z"].amount, Decimal::ZERO);
        assert_eq!(r.values().map(|s| s.amount).sum::<Decimal>(), dec!(100));
    }

    #[test]
    fn short_stay_tenant_sorting_last_is_never_charged_below_zero() {
        // Nine full-year tenants and one tenant "z" present for a single day.
        let days: Vec<(String, Decimal)> = (1..=9)
            .map(|i| (format!("t{i}"), dec!(365)))
            .chain(std::iter::once(("z".to_string(), dec!(1))))
            .collect();
        let weight_sum: Decimal = days.iter().map(|(_, d)| *d).sum();

        let mut total = dec!(100.00);
        while total <= dec!(101.00) {
            let raw: DistributionResult = days
                .iter()
                .map(|(id, d)| (id.clone(), TenantShare { amount: total * *d / weight_sum }))
                .collect();
            let r = round_distribution(&raw, 2, Some(total));
            assert_eq!(r.values().map(|s| s.amount).sum::<Decimal>(), total);
            for (id, share) in &r {
                assert!(share.amount >= Decimal::ZERO, "{id} at {total}");
                assert!((share.amount - raw[id].amount).abs() < dec!(0.01), "{id} at {total}");
            }
            total += dec!(0.01);
        }

        let raw: DistributionResult = days
            .iter()
            .map(|(id, d)| (id.clone(), TenantShare { amount: dec!(100.07) * *d / weight_sum }))
            .collect();
        assert_eq!(round_distribution(&raw, 2, Some(dec!(100.07)))["z"].amount, dec!(0.03));
    }

    #[test]
    fn unpooled_shares_are_only_rounded() {
        let r = round_distribution(&result(&[("a", dec!(252.0547945))]), 2, None);
        assert_eq!(r["a"].amount, dec!(252.05));
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(round_amount(dec!(0.125), 2), dec!(0.13));
        assert_eq!(round_amount(dec!(2.5), 0), dec!(3));
    }

    #[test]
    fn all_zero_pooled_result_stays_zero() {
        let r = round_distribution(
            &result(&[("a", Decimal::ZERO), ("b", Decimal::ZERO)]),
            2,
            Some(dec!(100)),
        );
        assert!(r.values().all(|s| s.amount.is_zero()));
    }
}
