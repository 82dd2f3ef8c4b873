use chrono::{Datelike, NaiveDate};

/// Language of month labels in reconciliation entries and printed
/// statements.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub enum MonthLabelLocale {
    #[default]
    German,
    English,
}

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// "<MonthName> <Year>" for the month containing `date`.
pub fn month_label(date: NaiveDate, locale: MonthLabelLocale) -> String {
    let names = match locale {
        MonthLabelLocale::German => &MONTHS_DE,
        MonthLabelLocale::English => &MONTHS_EN,
    };
    format!("{} {}", names[date.month0() as usize], date.year())
}
