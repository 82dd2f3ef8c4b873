use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::TenantOccupancy,
    errors::{InvalidCsv, InvalidOccupancy, ReadError},
};

#[async_trait]
pub(crate) trait TenantsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TenantOccupancy>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<TenantOccupancy>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct TenantsCsvDatasourceImpl;

impl TenantsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TenantsCsvDatasource for TenantsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TenantOccupancy>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("").trim();
                    let raw_unit_id = r.get(1).unwrap_or("").trim();
                    let raw_unit_area = r.get(2).unwrap_or("0");
                    let raw_move_in = r.get(3).unwrap_or("");
                    let raw_move_out = match r.get(4) {
                        Some(s) if !s.trim().is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    let unit_area =
                        AmountModel::from_str(raw_unit_area)?.non_negative("unit_area")?;
                    let move_in: ISODateModel = ISODateModel::from_str(raw_move_in)?;
                    let move_out: Option<ISODateModel> =
                        raw_move_out.map(ISODateModel::from_str).transpose()?;

                    // Validate.
                    let tenant = TenantOccupancy::new(
                        raw_id,
                        raw_unit_id,
                        unit_area,
                        move_in.into(),
                        move_out.map(Into::into),
                    );
                    if let Some(move_out) = tenant.move_out {
                        if move_out < tenant.move_in {
                            return Err(InvalidOccupancy::new(
                                &tenant.id,
                                &tenant.move_in,
                                &move_out,
                            ));
                        }
                    }
                    Ok(tenant)
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<TenantOccupancy>, ServerError>
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
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_open_and_closed_occupancies() {
        let csv = "id,unit_id,unit_area,move_in,move_out\n\
                   A,W1,50,2020-01-01,\n\
                   B,W2,75.5,2023-07-01,2024-03-31\n";
        let tenants = TenantsCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(tenants.len(), 2);
        assert_eq!(tenants[0].move_out, None);
        assert_eq!(tenants[1].unit_area, dec!(75.5));
        assert_eq!(tenants[1].move_out, NaiveDate::from_ymd_opt(2024, 3, 31));
    }

    #[test]
    fn rejects_move_out_before_move_in() {
        let csv = "id,unit_id,unit_area,move_in,move_out\n\
                   A,W1,50,2023-05-01,2023-04-30\n";
        assert!(TenantsCsvDatasourceImpl::new().from_string(csv).is_err());
    }

    #[test]
    fn rejects_negative_area_and_bad_dates() {
        let negative = "id,unit_id,unit_area,move_in,move_out\nA,W1,-50,2023-05-01,\n";
        assert!(TenantsCsvDatasourceImpl::new().from_string(negative).is_err());
        let bad_date = "id,unit_id,unit_area,move_in,move_out\nA,W1,50,01.05.2023,\n";
        assert!(TenantsCsvDatasourceImpl::new().from_string(bad_date).is_err());
    }
}
