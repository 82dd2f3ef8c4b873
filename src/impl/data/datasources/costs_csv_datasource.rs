use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, distribution_method_model::DistributionMethodModel},
    entities::{CostItem, DistributionMethod},
    errors::{InvalidCsv, MissingDistributionMethod, ReadError},
    ext::standard_cost_types::StandardCostType,
};

#[async_trait]
pub(crate) trait CostsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<CostItem>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<CostItem>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct CostsCsvDatasourceImpl;

impl CostsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CostsCsvDatasource for CostsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<CostItem>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("").trim();
                    let raw_description = r.get(1).unwrap_or("").trim();
                    let raw_method = match r.get(2) {
                        Some(s) if !s.trim().is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_total = r.get(3).unwrap_or("0");

                    // Parse.
                    let method: DistributionMethod = match raw_method {
                        Some(raw) => DistributionMethodModel::from_str(raw)?.into(),
                        None => StandardCostType::from_description(raw_description)
                            .map(|t| t.default_method())
                            .ok_or_else(|| {
                                MissingDistributionMethod::new(raw_id, raw_description)
                            })?,
                    };
                    let total = AmountModel::from_str(raw_total)?.non_negative("total")?;

                    // Build.
                    Ok(CostItem::new(raw_id, raw_description, method, total))
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<CostItem>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&content)
    }
}
