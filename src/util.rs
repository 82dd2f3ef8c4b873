use fractic_server_error::ServerError;

use crate::{
    domain::usecases::settlement_usecase::{SettlementUsecase as _, SettlementUsecaseImpl},
    entities::{BillingPeriod, SettlementSettings, SettlementSources, TenantSettlement},
    presentation::settlement_printer::SettlementPrinter,
};

/// Printed Betriebskostenabrechnung for all tenants.
pub type Statement = String;

pub struct BetriebskostenUtil {
    settlement_usecase: SettlementUsecaseImpl,
    printer: SettlementPrinter,
}

impl BetriebskostenUtil {
    pub fn new(settings: SettlementSettings) -> Self {
        Self {
            settlement_usecase: SettlementUsecaseImpl::new(settings),
            printer: SettlementPrinter::new(settings.currency),
        }
    }

    pub async fn from_string(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<&str>,
    ) -> Result<(Vec<TenantSettlement>, Statement), ServerError> {
        let settlements = self.settlement_usecase.from_string(period, sources).await?;
        let statement = self.printer.print(&settlements);
        Ok((settlements, statement))
    }

    pub async fn from_file<P>(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<P>,
    ) -> Result<(Vec<TenantSettlement>, Statement), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let settlements = self.settlement_usecase.from_file(period, sources).await?;
        let statement = self.printer.print(&settlements);
        Ok((settlements, statement))
    }
}

impl Default for BetriebskostenUtil {
    fn default() -> Self {
        Self::new(SettlementSettings::default())
    }
}
