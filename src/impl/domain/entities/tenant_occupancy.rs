use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One tenant's residency in one unit (apartment).
///
/// Several records may share the same `unit_id`, either as co-tenants or as a
/// succession of tenants in the same unit.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct TenantOccupancy {
    pub id: String,
    pub unit_id: String,
    /// Floor area of the unit in square meters.
    pub unit_area: Decimal,
    /// First day of occupancy (Einzug), inclusive.
    pub move_in: NaiveDate,
    /// Last day of occupancy (Auszug), inclusive. `None` while still
    /// occupying.
    pub move_out: Option<NaiveDate>,
}

impl TenantOccupancy {
    pub fn new(
        id: impl Into<String>,
        unit_id: impl Into<String>,
        unit_area: Decimal,
        move_in: NaiveDate,
        move_out: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.into(),
            unit_id: unit_id.into(),
            unit_area,
            move_in,
            move_out,
        }
    }
}
