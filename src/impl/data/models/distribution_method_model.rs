use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::DistributionMethod, errors::InvalidRon};

/// Distribution method column, written as a RON enum identifier. Both the
/// English (`PerArea`) and German (`ProFlaeche`) names are accepted.
#[derive(Debug)]
pub(crate) struct DistributionMethodModel(DistributionMethod);
impl FromStr for DistributionMethodModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method: DistributionMethod = ron::from_str(s.trim())
            .map_err(|e| InvalidRon::with_debug("DistributionMethod", &e))?;
        Ok(DistributionMethodModel(method))
    }
}

impl From<DistributionMethodModel> for DistributionMethod {
    fn from(model: DistributionMethodModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_english_and_german_names() {
        let m: DistributionMethod = DistributionMethodModel::from_str("PerArea").unwrap().into();
        assert_eq!(m, DistributionMethod::PerArea);
        let m: DistributionMethod = DistributionMethodModel::from_str("NachRechnung").unwrap().into();
        assert_eq!(m, DistributionMethod::ByInvoice);
        let m: DistributionMethod = DistributionMethodModel::from_str(" Verbrauch ").unwrap().into();
        assert_eq!(m, DistributionMethod::ByConsumption);
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(DistributionMethodModel::from_str("PerFloor").is_err());
    }
}
