use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

/// Allocation method for a single cost item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub enum DistributionMethod {
    /// Pro Fläche: floor area times occupied days.
    #[serde(alias = "ProFlaeche")]
    PerArea,
    /// Pro Mieter: occupied days only.
    #[serde(alias = "ProMieter")]
    PerTenant,
    /// Pro Wohnung: equal split per unit, then equal split per co-tenant.
    #[serde(alias = "ProWohnung")]
    PerUnit,
    /// Nach Rechnung: each tenant's own invoiced amount, shrunk by the
    /// fraction of the period they occupied.
    #[serde(alias = "NachRechnung")]
    ByInvoice,
    /// Metered consumption (e.g. water) times occupied days.
    #[serde(alias = "Verbrauch")]
    ByConsumption,
}

impl DistributionMethod {
    /// Pooled methods share one fixed total across tenants, so their shares
    /// sum to the cost figure.
    pub fn is_pooled(&self) -> bool {
        match self {
            DistributionMethod::PerArea
            | DistributionMethod::PerTenant
            | DistributionMethod::PerUnit
            | DistributionMethod::ByConsumption => true,
            DistributionMethod::ByInvoice => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistributionMethod::PerArea => "Pro Fläche",
            DistributionMethod::PerTenant => "Pro Mieter",
            DistributionMethod::PerUnit => "Pro Wohnung",
            DistributionMethod::ByInvoice => "Nach Rechnung",
            DistributionMethod::ByConsumption => "Verbrauch",
        }
    }
}

/// Tenant id -> directly invoiced amount (Nach Rechnung).
pub type IndividualAmountMap = HashMap<String, Decimal>;

/// Tenant id -> metered consumption quantity.
pub type ConsumptionReadingMap = HashMap<String, Decimal>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct TenantShare {
    pub amount: Decimal,
}

impl TenantShare {
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }
}

/// Tenant id -> allocated share. Ordered by tenant id so that output (and
/// rounding tie-breaks) are deterministic.
pub type DistributionResult = BTreeMap<String, TenantShare>;
