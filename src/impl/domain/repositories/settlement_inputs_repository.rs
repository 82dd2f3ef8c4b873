use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{BillingPeriod, SettlementInputs, SettlementSources};

#[async_trait]
pub trait SettlementInputsRepository: Send + Sync {
    fn from_string(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<&str>,
    ) -> Result<SettlementInputs, ServerError>;

    async fn from_file<P>(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<P>,
    ) -> Result<SettlementInputs, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
