use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidBillingPeriod;

/// Closed date interval `[start, end]` over which costs are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    /// Unchecked constructor. Callers guarantee `start <= end`; the allocation
    /// functions do not validate it.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, ServerError> {
        if start > end {
            return Err(InvalidBillingPeriod::new(&start, &end));
        }
        Ok(Self { start, end })
    }
}
