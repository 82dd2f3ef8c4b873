use std::collections::{BTreeMap, BTreeSet, HashMap};

use rust_decimal::Decimal;

use crate::entities::{
    BillingPeriod, ConsumptionReadingMap, DistributionMethod, DistributionResult,
    IndividualAmountMap, TenantOccupancy, TenantShare,
};

use super::occupancy::{overlap_days, period_days};

/// Dispatches to the strategy for `method`. `figures` is the individual
/// amount map for `ByInvoice` and the reading map for `ByConsumption`; the
/// other methods ignore it.
pub fn distribute(
    method: DistributionMethod,
    tenants: &[TenantOccupancy],
    total: Decimal,
    period: &BillingPeriod,
    figures: &HashMap<String, Decimal>,
) -> DistributionResult {
    match method {
        DistributionMethod::PerArea => distribute_by_area(tenants, total, period),
        DistributionMethod::PerTenant => distribute_per_tenant(tenants, total, period),
        DistributionMethod::PerUnit => distribute_per_unit(tenants, total, period),
        DistributionMethod::ByInvoice => distribute_by_invoice(tenants, total, period, figures),
        DistributionMethod::ByConsumption => {
            distribute_by_consumption(tenants, total, period, figures)
        }
    }
}

/// Pro Fläche: weight = unit area x overlap days.
pub fn distribute_by_area(
    tenants: &[TenantOccupancy],
    total: Decimal,
    period: &BillingPeriod,
) -> DistributionResult {
    pooled(tenants, total, |t| t.unit_area * Decimal::from(overlap_days(t, period)))
}

/// Pro Mieter: weight = overlap days.
pub fn distribute_per_tenant(
    tenants: &[TenantOccupancy],
    total: Decimal,
    period: &BillingPeriod,
) -> DistributionResult {
    pooled(tenants, total, |t| Decimal::from(overlap_days(t, period)))
}

/// Metered consumption: weight = reading x overlap days. Tenants without a
/// reading count as zero consumption.
pub fn distribute_by_consumption(
    tenants: &[TenantOccupancy],
    total: Decimal,
    period: &BillingPeriod,
    readings: &ConsumptionReadingMap,
) -> DistributionResult {
    pooled(tenants, total, |t| {
        let reading = readings.get(&t.id).copied().unwrap_or(Decimal::ZERO);
        reading * Decimal::from(overlap_days(t, period))
    })
}

/// Pro Wohnung: the total is split equally among the units that have at least
/// one occupant during the period, then equally among each unit's occupants.
/// The split inside a unit is not time-weighted.
pub fn distribute_per_unit(
    tenants: &[TenantOccupancy],
    total: Decimal,
    period: &BillingPeriod,
) -> DistributionResult {
    let mut result = zeroed(tenants);
    if total.is_zero() {
        return result;
    }

    // A tenant with several records in one unit counts once.
    let mut occupants_by_unit: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for t in tenants.iter().filter(|t| overlap_days(t, period) > 0) {
        occupants_by_unit
            .entry(t.unit_id.as_str())
            .or_default()
            .insert(t.id.as_str());
    }
    if occupants_by_unit.is_empty() {
        tracing::debug!(
            tenants = tenants.len(),
            "no occupied unit in billing period; all shares are zero"
        );
        return result;
    }

    let unit_share = total / Decimal::from(occupants_by_unit.len());
    for occupants in occupants_by_unit.values() {
        let tenant_share = unit_share / Decimal::from(occupants.len());
        for id in occupants {
            if let Some(share) = result.get_mut(*id) {
                share.amount += tenant_share;
            }
        }
    }
    result
}

/// Nach Rechnung: each tenant's own invoiced amount scaled by the fraction of
/// the period they occupied. Tenants do not share a pool; tenants absent from
/// `individual_amounts` owe zero.
pub fn distribute_by_invoice(
    tenants: &[TenantOccupancy],
    total: Decimal,
    period: &BillingPeriod,
    individual_amounts: &IndividualAmountMap,
) -> DistributionResult {
    let mut result = zeroed(tenants);
    let days_in_period = period_days(period);
    if total.is_zero() || days_in_period <= 0 {
        return result;
    }

    let days_in_period = Decimal::from(days_in_period);
    for t in tenants {
        let invoiced = individual_amounts
            .get(&t.id)
            .copied()
            .unwrap_or(Decimal::ZERO);
        let days = Decimal::from(overlap_days(t, period));
        if let Some(share) = result.get_mut(&t.id) {
            share.amount += invoiced * days / days_in_period;
        }
    }
    result
}

// Helpers.
// ---

/// Every tenant mapped to a zero share.
fn zeroed(tenants: &[TenantOccupancy]) -> DistributionResult {
    tenants
        .iter()
        .map(|t| (t.id.clone(), TenantShare::zero()))
        .collect()
}

/// Proportional split of `total` by `weight`. A zero weight sum yields zero
/// shares instead of a division by zero.
fn pooled<F>(tenants: &[TenantOccupancy], total: Decimal, weight: F) -> DistributionResult
where
    F: Fn(&TenantOccupancy) -> Decimal,
{
    let mut result = zeroed(tenants);
    if total.is_zero() {
        return result;
    }

    let weights: Vec<(&str, Decimal)> = tenants
        .iter()
        .map(|t| (t.id.as_str(), weight(t)))
        .collect();
    let weight_sum: Decimal = weights.iter().map(|(_, w)| *w).sum();
    if weight_sum.is_zero() {
        tracing::debug!(
            tenants = tenants.len(),
            "distribution weights sum to zero; all shares are zero"
        );
        return result;
    }

    for (id, w) in weights {
        if let Some(share) = result.get_mut(id) {
            // One tenant id may hold several records (one per unit).
            share.amount += total * w / weight_sum;
        }
    }
    result
}
