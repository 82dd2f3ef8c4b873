use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    data::models::amount_model::AmountModel,
    errors::{InvalidCsv, ReadError},
};

/// Per-tenant figure of a cost item: an invoiced amount (`ByInvoice`) or a
/// meter reading (`ByConsumption`).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TenantFigure {
    pub(crate) cost_id: String,
    pub(crate) tenant_id: String,
    pub(crate) value: Decimal,
}

#[async_trait]
pub(crate) trait FiguresCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TenantFigure>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<TenantFigure>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct FiguresCsvDatasourceImpl;

impl FiguresCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FiguresCsvDatasource for FiguresCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TenantFigure>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    let raw_cost_id = r.get(0).unwrap_or("").trim();
                    let raw_tenant_id = r.get(1).unwrap_or("").trim();
                    let raw_value = r.get(2).unwrap_or("0");

                    Ok(TenantFigure {
                        cost_id: raw_cost_id.to_string(),
                        tenant_id: raw_tenant_id.to_string(),
                        value: AmountModel::from_str(raw_value)?.non_negative("value")?,
                    })
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<TenantFigure>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&content)
    }
}
