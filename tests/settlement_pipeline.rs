//! End-to-end settlement from CSV inputs.

use betriebskosten::{
    entities::{BillingPeriod, DistributionMethod, SettlementSettings, SettlementSources},
    util::BetriebskostenUtil,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TENANTS: &str = "id,unit_id,unit_area,move_in,move_out
A,W1,50,2019-04-01,
B,W2,75,2023-07-01,
";

const COSTS: &str = "id,description,method,total
k1,Grundsteuer,,1000
k2,Schornsteinfeger,ProWohnung,300
k3,Kaltwasser,Verbrauch,730
k4,Reparatur Klingelanlage,NachRechnung,400
";

const FIGURES: &str = "cost_id,tenant_id,value
k3,A,40
k3,B,80
k4,A,200
k4,B,200
";

const PREPAYMENTS: &str = "tenant_id,effective_date,amount
A,2023-01-01,100
B,2023-07-01,150
";

fn year_2023() -> BillingPeriod {
    BillingPeriod::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    )
}

fn sources() -> SettlementSources<&'static str> {
    SettlementSources {
        tenants: TENANTS,
        costs: COSTS,
        figures: FIGURES,
        prepayments: PREPAYMENTS,
    }
}

#[tokio::test]
async fn settles_all_tenants_from_strings() {
    let (settlements, statement) = BetriebskostenUtil::default()
        .from_string(year_2023(), sources())
        .await
        .unwrap();
    assert_eq!(settlements.len(), 2);

    let a = &settlements[0];
    assert_eq!(a.cost_lines.len(), 4);
    assert_eq!(a.cost_lines[0].method, DistributionMethod::PerArea);
    assert_eq!(a.cost_lines[0].amount, dec!(569.42));
    assert_eq!(a.cost_lines[1].amount, dec!(150));
    assert_eq!(a.cost_lines[3].amount, dec!(200));
    assert_eq!(a.prepayments.total, dec!(1200));

    let b = &settlements[1];
    assert_eq!(b.cost_lines[0].amount, dec!(430.58));
    assert_eq!(b.cost_lines[3].amount, dec!(100.82));
    assert_eq!(b.prepayments.total, dec!(900));
    assert_eq!(b.prepayments.active_months(), 6);

    // Pooled lines add up exactly after rounding.
    for i in 0..3 {
        let sum: Decimal = settlements.iter().map(|s| s.cost_lines[i].amount).sum();
        assert_eq!(sum, [dec!(1000), dec!(300), dec!(730)][i]);
    }
    for s in &settlements {
        assert_eq!(s.balance, s.total_costs - s.prepayments.total);
    }

    assert!(statement.contains("Mieter A"));
    assert!(statement.contains("Mieter B"));
    assert!(statement.contains("Juli 2023"));
}

#[tokio::test]
async fn english_month_labels_via_settings() {
    let settings =
        SettlementSettings::from_ron("(month_label_locale: Some(English))").unwrap();
    let (settlements, statement) = BetriebskostenUtil::new(settings)
        .from_string(year_2023(), sources())
        .await
        .unwrap();
    assert_eq!(settlements[0].prepayments.months[0].month_label, "January 2023");
    assert!(statement.contains("July 2023"));
}

#[tokio::test]
async fn settles_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = |name: &str| dir.path().join(name);
    std::fs::write(path("tenants.csv"), TENANTS).unwrap();
    std::fs::write(path("costs.csv"), COSTS).unwrap();
    std::fs::write(path("figures.csv"), FIGURES).unwrap();
    std::fs::write(path("prepayments.csv"), PREPAYMENTS).unwrap();

    let from_files = BetriebskostenUtil::default()
        .from_file(
            year_2023(),
            SettlementSources {
                tenants: path("tenants.csv"),
                costs: path("costs.csv"),
                figures: path("figures.csv"),
                prepayments: path("prepayments.csv"),
            },
        )
        .await
        .unwrap();
    let from_strings = BetriebskostenUtil::default()
        .from_string(year_2023(), sources())
        .await
        .unwrap();
    assert_eq!(from_files, from_strings);
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    let result = BetriebskostenUtil::default()
        .from_file(
            year_2023(),
            SettlementSources {
                tenants: missing.clone(),
                costs: missing.clone(),
                figures: missing.clone(),
                prepayments: missing,
            },
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn invalid_inputs_are_rejected() {
    let util = BetriebskostenUtil::default();

    let mut bad_method = sources();
    bad_method.costs = "id,description,method,total\nk1,Sonstiges,,10\n";
    assert!(util.from_string(year_2023(), bad_method).await.is_err());

    let mut bad_occupancy = sources();
    bad_occupancy.tenants =
        "id,unit_id,unit_area,move_in,move_out\nA,W1,50,2023-05-01,2023-01-01\n";
    assert!(util.from_string(year_2023(), bad_occupancy).await.is_err());

    let mut negative = sources();
    negative.prepayments = "tenant_id,effective_date,amount\nA,2023-01-01,-100\n";
    assert!(util.from_string(year_2023(), negative).await.is_err());
}
