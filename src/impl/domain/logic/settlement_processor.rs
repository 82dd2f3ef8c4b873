use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{
    CostItem, CostLine, DistributionResult, PrepaymentSummary, SettlementInputs,
    SettlementSettings, TenantOccupancy, TenantSettlement,
};

use super::{
    distribution_strategies::distribute,
    occupancy::overlap_days,
    prepayment_reconciler::reconcile_prepayments_for_stays,
    rounding::{round_amount, round_distribution},
};

/// Turns settlement inputs into one Betriebskostenabrechnung per tenant.
pub struct SettlementProcessor {
    inputs: SettlementInputs,
    settings: SettlementSettings,
}

/// All records of one tenant id, in input order.
struct TenantRecords<'a> {
    id: &'a str,
    records: Vec<&'a TenantOccupancy>,
}

impl TenantRecords<'_> {
    /// One `(move_in, move_out)` pair per record.
    fn stays(&self) -> Vec<(Option<NaiveDate>, Option<NaiveDate>)> {
        self.records.iter().map(|r| (Some(r.move_in), r.move_out)).collect()
    }
}

impl SettlementProcessor {
    pub fn new(inputs: SettlementInputs, settings: SettlementSettings) -> Self {
        Self { inputs, settings }
    }

    #[tracing::instrument(
        skip_all,
        fields(
            period_start = %self.inputs.period.start,
            period_end = %self.inputs.period.end
        )
    )]
    pub fn process(self) -> Vec<TenantSettlement> {
        let SettlementInputs {
            period,
            tenants,
            cost_items,
            prepayments,
        } = &self.inputs;

        let distributions: Vec<(&CostItem, DistributionResult)> = cost_items
            .iter()
            .map(|item| (item, self.distribute_item(item)))
            .collect();

        let settlements: Vec<TenantSettlement> = group_by_tenant(tenants)
            .into_iter()
            .map(|tenant| {
                let cost_lines: Vec<CostLine> = distributions
                    .iter()
                    .map(|(item, result)| CostLine {
                        cost_id: item.id.clone(),
                        description: item.description.clone(),
                        method: item.method,
                        amount: result
                            .get(tenant.id)
                            .map_or(Decimal::ZERO, |share| share.amount),
                    })
                    .collect();
                let total_costs: Decimal = cost_lines.iter().map(|l| l.amount).sum();

                let prepayments = match prepayments.get(tenant.id) {
                    Some(schedule) => reconcile_prepayments_for_stays(
                        period,
                        schedule,
                        &tenant.stays(),
                        self.settings.month_label_locale,
                    ),
                    None => PrepaymentSummary::empty(),
                };

                let balance = total_costs - prepayments.total;
                let occupied_days: i64 =
                    tenant.records.iter().map(|r| overlap_days(r, period)).sum();
                TenantSettlement {
                    tenant_id: tenant.id.to_string(),
                    unit_id: tenant.records[0].unit_id.clone(),
                    period: *period,
                    occupied_days,
                    cost_lines,
                    total_costs,
                    prepayments,
                    balance: if self.settings.round_shares {
                        round_amount(balance, self.settings.decimal_places())
                    } else {
                        balance
                    },
                }
            })
            .collect();

        tracing::info!(
            tenants = settlements.len(),
            cost_items = cost_items.len(),
            "settlement processed"
        );
        settlements
    }

    fn distribute_item(&self, item: &CostItem) -> DistributionResult {
        let SettlementInputs { period, tenants, .. } = &self.inputs;

        for tenant_id in item.figures.keys() {
            if !tenants.iter().any(|t| &t.id == tenant_id) {
                tracing::warn!(
                    cost_id = %item.id,
                    tenant_id = %tenant_id,
                    "figure references a tenant that is not part of the settlement"
                );
            }
        }

        let result = distribute(item.method, tenants, item.total, period, &item.figures);
        tracing::debug!(
            cost_id = %item.id,
            method = item.method.label(),
            total = %item.total,
            "cost item distributed"
        );

        if self.settings.round_shares {
            let pooled_total = item.method.is_pooled().then_some(item.total);
            round_distribution(&result, self.settings.decimal_places(), pooled_total)
        } else {
            result
        }
    }
}

/// Groups records by tenant id, keeping the order of first appearance.
fn group_by_tenant(tenants: &[TenantOccupancy]) -> Vec<TenantRecords<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<TenantRecords> = Vec::new();
    for t in tenants {
        match index.get(t.id.as_str()) {
            Some(&i) => groups[i].records.push(t),
            None => {
                index.insert(t.id.as_str(), groups.len());
                groups.push(TenantRecords {
                    id: t.id.as_str(),
                    records: vec![t],
                });
            }
        }
    }
    groups
}
