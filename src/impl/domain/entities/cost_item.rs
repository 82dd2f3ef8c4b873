use std::collections::HashMap;

use rust_decimal::Decimal;

use super::distribution::DistributionMethod;

/// One operating cost position of a settlement (e.g. "Grundsteuer").
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct CostItem {
    pub id: String,
    pub description: String,
    pub method: DistributionMethod,
    /// Total to distribute. `ByInvoice` takes its amounts from `figures` and
    /// only checks the total for zero.
    pub total: Decimal,
    /// Per-tenant figures: invoiced amounts for `ByInvoice`, meter readings
    /// for `ByConsumption`. Unused by the other methods.
    pub figures: HashMap<String, Decimal>,
}

impl CostItem {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        method: DistributionMethod,
        total: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            method,
            total,
            figures: HashMap::new(),
        }
    }
}
