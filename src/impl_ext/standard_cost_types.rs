use crate::entities::DistributionMethod;

/// Operating cost types of § 2 BetrKV, with the distribution method commonly
/// used for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardCostType {
    Grundsteuer,
    Wasserversorgung,
    Entwaesserung,
    Heizung,
    Warmwasser,
    Aufzug,
    Strassenreinigung,
    Muellbeseitigung,
    Gebaeudereinigung,
    Gartenpflege,
    Beleuchtung,
    Schornsteinreinigung,
    Versicherung,
    Hauswart,
    Antenne,
    Waeschepflege,
}

impl StandardCostType {
    pub const ALL: [StandardCostType; 16] = [
        StandardCostType::Grundsteuer,
        StandardCostType::Wasserversorgung,
        StandardCostType::Entwaesserung,
        StandardCostType::Heizung,
        StandardCostType::Warmwasser,
        StandardCostType::Aufzug,
        StandardCostType::Strassenreinigung,
        StandardCostType::Muellbeseitigung,
        StandardCostType::Gebaeudereinigung,
        StandardCostType::Gartenpflege,
        StandardCostType::Beleuchtung,
        StandardCostType::Schornsteinreinigung,
        StandardCostType::Versicherung,
        StandardCostType::Hauswart,
        StandardCostType::Antenne,
        StandardCostType::Waeschepflege,
    ];

    pub fn label(&self) -> &'static str {
        self.names()[0]
    }

    /// Metered costs default to consumption, per-household services to an
    /// equal split per unit or per tenant, everything else to floor area.
    pub fn default_method(&self) -> DistributionMethod {
        match self {
            StandardCostType::Wasserversorgung
            | StandardCostType::Entwaesserung
            | StandardCostType::Heizung
            | StandardCostType::Warmwasser => DistributionMethod::ByConsumption,
            StandardCostType::Muellbeseitigung | StandardCostType::Waeschepflege => {
                DistributionMethod::PerTenant
            }
            StandardCostType::Schornsteinreinigung | StandardCostType::Antenne => {
                DistributionMethod::PerUnit
            }
            StandardCostType::Grundsteuer
            | StandardCostType::Aufzug
            | StandardCostType::Strassenreinigung
            | StandardCostType::Gebaeudereinigung
            | StandardCostType::Gartenpflege
            | StandardCostType::Beleuchtung
            | StandardCostType::Versicherung
            | StandardCostType::Hauswart => DistributionMethod::PerArea,
        }
    }

    /// Case-insensitive lookup by label or a common synonym.
    pub fn from_description(description: &str) -> Option<StandardCostType> {
        let needle = description.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.names().iter().any(|name| name.to_lowercase() == needle))
    }

    /// Label first, then synonyms.
    fn names(&self) -> &'static [&'static str] {
        match self {
            StandardCostType::Grundsteuer => &["Grundsteuer", "Öffentliche Lasten"],
            StandardCostType::Wasserversorgung => &["Wasserversorgung", "Wasser", "Kaltwasser"],
            StandardCostType::Entwaesserung => &["Entwässerung", "Abwasser", "Niederschlagswasser"],
            StandardCostType::Heizung => &["Heizung", "Heizkosten"],
            StandardCostType::Warmwasser => &["Warmwasser"],
            StandardCostType::Aufzug => &["Aufzug", "Fahrstuhl"],
            StandardCostType::Strassenreinigung => &["Straßenreinigung", "Winterdienst"],
            StandardCostType::Muellbeseitigung => &["Müllbeseitigung", "Müllabfuhr", "Müll"],
            StandardCostType::Gebaeudereinigung => &["Gebäudereinigung", "Ungezieferbekämpfung"],
            StandardCostType::Gartenpflege => &["Gartenpflege"],
            StandardCostType::Beleuchtung => &["Beleuchtung", "Allgemeinstrom"],
            StandardCostType::Schornsteinreinigung => &["Schornsteinreinigung", "Schornsteinfeger"],
            StandardCostType::Versicherung => &[
                "Sach- und Haftpflichtversicherung",
                "Versicherung",
                "Gebäudeversicherung",
            ],
            StandardCostType::Hauswart => &["Hauswart", "Hausmeister"],
            StandardCostType::Antenne => &["Antenne", "Kabelanschluss", "Gemeinschaftsantenne"],
            StandardCostType::Waeschepflege => &["Wäschepflege"],
        }
    }
}
