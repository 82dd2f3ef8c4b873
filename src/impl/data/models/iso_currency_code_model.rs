use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde::Deserialize;

use crate::errors::InvalidIsoCurrencyCode;

#[derive(Debug)]
pub(crate) struct ISOCurrencyCodeModel(Currency);
impl FromStr for ISOCurrencyCodeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::from_code(&code)
            .map(ISOCurrencyCodeModel)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(s))
    }
}
impl<'de> Deserialize<'de> for ISOCurrencyCodeModel {
    fn deserialize<D>(deserializer: D) -> Result<ISOCurrencyCodeModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISOCurrencyCodeModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<ISOCurrencyCodeModel> for Currency {
    fn from(model: ISOCurrencyCodeModel) -> Self {
        model.0
    }
}
