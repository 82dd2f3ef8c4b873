use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A monthly advance payment (Vorauszahlung) in effect from `effective_date`
/// until superseded by a later entry.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct PrepaymentEntry {
    pub effective_date: NaiveDate,
    pub amount: Decimal,
}

impl PrepaymentEntry {
    pub fn new(effective_date: NaiveDate, amount: Decimal) -> Self {
        Self {
            effective_date,
            amount,
        }
    }
}

/// Unordered list of schedule entries.
pub type PrepaymentSchedule = Vec<PrepaymentEntry>;

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct MonthlyReconciliationEntry {
    /// "<MonthName> <Year>", e.g. "Januar 2024".
    pub month_label: String,
    pub month_start: NaiveDate,
    pub amount: Decimal,
    pub is_active_month: bool,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct PrepaymentSummary {
    pub total: Decimal,
    pub months: Vec<MonthlyReconciliationEntry>,
}

impl PrepaymentSummary {
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            months: Vec::new(),
        }
    }

    pub fn active_months(&self) -> usize {
        self.months.iter().filter(|m| m.is_active_month).count()
    }
}
