use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{
    billing_period::BillingPeriod,
    cost_item::CostItem,
    distribution::DistributionMethod,
    prepayment::{PrepaymentEntry, PrepaymentSummary},
    tenant_occupancy::TenantOccupancy,
};

// Before settlement processing.
// ---

#[derive(Debug, Clone)]
pub struct SettlementInputs {
    pub period: BillingPeriod,
    pub tenants: Vec<TenantOccupancy>,
    pub cost_items: Vec<CostItem>,
    /// Tenant id -> prepayment schedule. Tenants without an entry paid
    /// nothing in advance.
    pub prepayments: HashMap<String, Vec<PrepaymentEntry>>,
}

// After settlement processing.
// ---

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct CostLine {
    pub cost_id: String,
    pub description: String,
    pub method: DistributionMethod,
    pub amount: Decimal,
}

/// Betriebskostenabrechnung for one tenant.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct TenantSettlement {
    pub tenant_id: String,
    pub unit_id: String,
    pub period: BillingPeriod,
    pub occupied_days: i64,
    pub cost_lines: Vec<CostLine>,
    pub total_costs: Decimal,
    pub prepayments: PrepaymentSummary,
    /// `total_costs - prepayments.total`. Positive: back payment
    /// (Nachzahlung). Negative: credit (Guthaben).
    pub balance: Decimal,
}

impl TenantSettlement {
    pub fn is_back_payment(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    pub fn is_credit(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}

// Input locations.
// ---

/// The four input tables of a settlement: CSV contents (`&str`) or file
/// paths.
#[derive(Debug, Clone)]
pub struct SettlementSources<T> {
    /// `id,unit_id,unit_area,move_in,move_out`
    pub tenants: T,
    /// `id,description,method,total`
    pub costs: T,
    /// `cost_id,tenant_id,value`
    pub figures: T,
    /// `tenant_id,effective_date,amount`
    pub prepayments: T,
}
