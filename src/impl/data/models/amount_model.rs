use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::errors::{InvalidAmount, NegativeAmount};

/// Decimal amount as written in input files, with optional ',' thousands
/// separators (e.g. "1,250.50").
#[derive(Debug)]
pub(crate) struct AmountModel(pub Decimal);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(",", "");
        let amount = Decimal::from_str(&raw).map_err(|e| InvalidAmount::with_debug(s, &e))?;
        Ok(AmountModel(amount))
    }
}

impl AmountModel {
    /// Rejects negative values; `field` names the column in the error.
    pub(crate) fn non_negative(self, field: &str) -> Result<Decimal, ServerError> {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            return Err(NegativeAmount::new(&self.0.to_string(), field));
        }
        Ok(self.0)
    }
}
