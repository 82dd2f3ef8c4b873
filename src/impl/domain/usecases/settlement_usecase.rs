use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::settlement_inputs_repository_impl::SettlementInputsRepositoryImpl,
    domain::{
        logic::settlement_processor::SettlementProcessor,
        repositories::settlement_inputs_repository::SettlementInputsRepository,
    },
    entities::{BillingPeriod, SettlementSettings, SettlementSources, TenantSettlement},
};

#[async_trait]
pub trait SettlementUsecase: Send + Sync {
    async fn from_string(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<&str>,
    ) -> Result<Vec<TenantSettlement>, ServerError>;

    async fn from_file<P>(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<P>,
    ) -> Result<Vec<TenantSettlement>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct SettlementUsecaseImpl<
    R1 = SettlementInputsRepositoryImpl, // Default.
> where
    R1: SettlementInputsRepository,
{
    inputs_repository: R1,
    settings: SettlementSettings,
}

#[async_trait]
impl<R1> SettlementUsecase for SettlementUsecaseImpl<R1>
where
    R1: SettlementInputsRepository,
{
    async fn from_string(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<&str>,
    ) -> Result<Vec<TenantSettlement>, ServerError> {
        let inputs = self.inputs_repository.from_string(period, sources)?;
        Ok(SettlementProcessor::new(inputs, self.settings).process())
    }

    async fn from_file<P>(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<P>,
    ) -> Result<Vec<TenantSettlement>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let inputs = self.inputs_repository.from_file(period, sources).await?;
        Ok(SettlementProcessor::new(inputs, self.settings).process())
    }
}

impl SettlementUsecaseImpl {
    pub(crate) fn new(settings: SettlementSettings) -> Self {
        SettlementUsecaseImpl {
            inputs_repository: SettlementInputsRepositoryImpl::new(),
            settings,
        }
    }
}
