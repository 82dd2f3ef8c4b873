use std::{collections::HashMap, str::FromStr as _};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::PrepaymentEntry,
    errors::{InvalidCsv, ReadError},
};

/// Tenant id -> prepayment schedule, entries in file order.
pub(crate) type PrepaymentSchedules = HashMap<String, Vec<PrepaymentEntry>>;

#[async_trait]
pub(crate) trait PrepaymentsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<PrepaymentSchedules, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<PrepaymentSchedules, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct PrepaymentsCsvDatasourceImpl;

impl PrepaymentsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PrepaymentsCsvDatasource for PrepaymentsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<PrepaymentSchedules, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    let raw_tenant_id = r.get(0).unwrap_or("").trim();
                    let raw_effective_date = r.get(1).unwrap_or("");
                    let raw_amount = r.get(2).unwrap_or("0");

                    let effective_date = ISODateModel::from_str(raw_effective_date)?;
                    let amount = AmountModel::from_str(raw_amount)?.non_negative("amount")?;
                    Ok((
                        raw_tenant_id.to_string(),
                        PrepaymentEntry::new(effective_date.into(), amount),
                    ))
                })
            })
            .try_fold(PrepaymentSchedules::new(), |mut schedules, entry| {
                let (tenant_id, entry) = entry?;
                schedules.entry(tenant_id).or_default().push(entry);
                Ok(schedules)
            })
    }

    async fn from_file<P>(&self, path: P) -> Result<PrepaymentSchedules, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&content)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_entries_by_tenant_in_file_order() {
        let csv = "tenant_id,effective_date,amount\n\
                   A,2024-07-01,600\n\
                   B,2024-01-01,150\n\
                   A,2024-01-01,500\n";
        let schedules = PrepaymentsCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules["A"].len(), 2);
        assert_eq!(schedules["A"][0].amount, dec!(600));
        assert_eq!(schedules["B"][0].amount, dec!(150));
    }
}
