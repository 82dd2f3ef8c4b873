use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        costs_csv_datasource::{CostsCsvDatasource, CostsCsvDatasourceImpl},
        figures_csv_datasource::{FiguresCsvDatasource, FiguresCsvDatasourceImpl, TenantFigure},
        prepayments_csv_datasource::{PrepaymentsCsvDatasource, PrepaymentsCsvDatasourceImpl},
        tenants_csv_datasource::{TenantsCsvDatasource, TenantsCsvDatasourceImpl},
    },
    domain::repositories::settlement_inputs_repository::SettlementInputsRepository,
    entities::{BillingPeriod, CostItem, SettlementInputs, SettlementSources},
    errors::UnknownCostItem,
};

pub(crate) struct SettlementInputsRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: TenantsCsvDatasource,
    DS2: CostsCsvDatasource,
    DS3: FiguresCsvDatasource,
    DS4: PrepaymentsCsvDatasource,
{
    tenants_datasource: DS1,
    costs_datasource: DS2,
    figures_datasource: DS3,
    prepayments_datasource: DS4,
}

#[async_trait]
impl<DS1, DS2, DS3, DS4> SettlementInputsRepository
    for SettlementInputsRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: TenantsCsvDatasource,
    DS2: CostsCsvDatasource,
    DS3: FiguresCsvDatasource,
    DS4: PrepaymentsCsvDatasource,
{
    fn from_string(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<&str>,
    ) -> Result<SettlementInputs, ServerError> {
        validate_period(&period)?;
        Ok(SettlementInputs {
            period,
            tenants: self.tenants_datasource.from_string(sources.tenants)?,
            cost_items: attach_figures(
                self.costs_datasource.from_string(sources.costs)?,
                self.figures_datasource.from_string(sources.figures)?,
            )?,
            prepayments: self.prepayments_datasource.from_string(sources.prepayments)?,
        })
    }

    async fn from_file<P>(
        &self,
        period: BillingPeriod,
        sources: SettlementSources<P>,
    ) -> Result<SettlementInputs, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        validate_period(&period)?;
        let (tenants, cost_items, figures, prepayments) = futures::try_join!(
            self.tenants_datasource.from_file(sources.tenants),
            self.costs_datasource.from_file(sources.costs),
            self.figures_datasource.from_file(sources.figures),
            self.prepayments_datasource.from_file(sources.prepayments),
        )?;
        Ok(SettlementInputs {
            period,
            tenants,
            cost_items: attach_figures(cost_items, figures)?,
            prepayments,
        })
    }
}

impl
    SettlementInputsRepositoryImpl<
        TenantsCsvDatasourceImpl,
        CostsCsvDatasourceImpl,
        FiguresCsvDatasourceImpl,
        PrepaymentsCsvDatasourceImpl,
    >
{
    pub(crate) fn new() -> Self {
        SettlementInputsRepositoryImpl {
            tenants_datasource: TenantsCsvDatasourceImpl::new(),
            costs_datasource: CostsCsvDatasourceImpl::new(),
            figures_datasource: FiguresCsvDatasourceImpl::new(),
            prepayments_datasource: PrepaymentsCsvDatasourceImpl::new(),
        }
    }
}

fn validate_period(period: &BillingPeriod) -> Result<(), ServerError> {
    BillingPeriod::try_new(period.start, period.end).map(|_| ())
}

/// Moves each figure into its cost item. A later figure for the same tenant
/// and cost item replaces an earlier one.
fn attach_figures(
    mut cost_items: Vec<CostItem>,
    figures: Vec<TenantFigure>,
) -> Result<Vec<CostItem>, ServerError> {
    for figure in figures {
        let item = cost_items
            .iter_mut()
            .find(|item| item.id == figure.cost_id)
            .ok_or_else(|| UnknownCostItem::new(&figure.cost_id, &figure.tenant_id))?;
        item.figures.insert(figure.tenant_id, figure.value);
    }
    Ok(cost_items)
}
