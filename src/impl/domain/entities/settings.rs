use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::models::iso_currency_code_model::ISOCurrencyCodeModel, errors::InvalidRon,
    presentation::month_label_fmt::MonthLabelLocale,
};

/// Settings shared by the settlement processor and the printer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementSettings {
    /// Currency of all amounts. Its exponent defines the rounding precision.
    pub currency: Currency,
    pub month_label_locale: MonthLabelLocale,
    /// Round every share to the currency's decimal places. Pooled methods
    /// are apportioned by largest remainder so they keep their total.
    pub round_shares: bool,
}

impl Default for SettlementSettings {
    fn default() -> Self {
        Self {
            currency: Currency::EUR,
            month_label_locale: MonthLabelLocale::German,
            round_shares: true,
        }
    }
}

#[derive(Debug, serde_derive::Deserialize)]
struct SettlementSettingsModel {
    #[serde(default)]
    currency: Option<ISOCurrencyCodeModel>,
    #[serde(default)]
    month_label_locale: Option<MonthLabelLocale>,
    #[serde(default)]
    round_shares: Option<bool>,
}

impl SettlementSettings {
    /// Parses settings from RON, e.g.
    /// `(currency: Some("CHF"), month_label_locale: Some(English))`. Omitted
    /// fields keep their defaults.
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        let model: SettlementSettingsModel =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("SettlementSettings", &e))?;
        let defaults = Self::default();
        Ok(Self {
            currency: model.currency.map_or(defaults.currency, Currency::from),
            month_label_locale: model
                .month_label_locale
                .unwrap_or(defaults.month_label_locale),
            round_shares: model.round_shares.unwrap_or(defaults.round_shares),
        })
    }

    /// Number of decimal places amounts are rounded to (EUR = 2, JPY = 0).
    pub fn decimal_places(&self) -> u32 {
        self.currency.exponent().unwrap_or(0) as u32
    }
}
