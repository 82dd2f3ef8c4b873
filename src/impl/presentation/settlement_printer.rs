use iso_currency::Currency;

use crate::entities::{CostLine, TenantSettlement};

use super::utils::format_amount;

const DESCRIPTION_WIDTH: usize = 34;

pub(crate) struct SettlementPrinter {
    currency: Currency,
}

impl SettlementPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Plain-text Betriebskostenabrechnung, one section per tenant.
    pub(crate) fn print(&self, settlements: &[TenantSettlement]) -> String {
        let mut output = String::new();
        for settlement in settlements {
            self.print_header(&mut output, settlement);
            self.print_cost_lines(&mut output, settlement);
            output.push('\n');
            self.print_prepayments(&mut output, settlement);
            output.push('\n');
            self.print_balance(&mut output, settlement);
            output.push_str("\n\n");
        }
        output
    }

    fn print_header(&self, output: &mut String, settlement: &TenantSettlement) {
        let title = format!(
            "; --- Mieter {} (Wohnung {}) ",
            settlement.tenant_id, settlement.unit_id
        );
        output.push_str(&format!("{:-<80}\n\n", title));
        output.push_str(&format!(
            "Abrechnungszeitraum: {} bis {} (bewohnt: {} Tage)\n\n",
            settlement.period.start, settlement.period.end, settlement.occupied_days
        ));
    }

    fn print_cost_lines(&self, output: &mut String, settlement: &TenantSettlement) {
        for line in &settlement.cost_lines {
            self.print_cost_line(output, line);
        }
        output.push_str(&format!(
            "    {:58} {:>16}\n",
            "Summe Kosten",
            format_amount(settlement.total_costs, self.currency)
        ));
    }

    fn print_cost_line(&self, output: &mut String, line: &CostLine) {
        let wrapped = textwrap::wrap(&line.description, DESCRIPTION_WIDTH);
        let mut rows = wrapped.iter();
        let first = rows.next().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!(
            "    {:w$} {:23} {:>16}\n",
            first,
            line.method.label(),
            format_amount(line.amount, self.currency),
            w = DESCRIPTION_WIDTH,
        ));
        for row in rows {
            output.push_str(&format!("    {}\n", row));
        }
    }

    fn print_prepayments(&self, output: &mut String, settlement: &TenantSettlement) {
        output.push_str("  Vorauszahlungen:\n");
        for month in &settlement.prepayments.months {
            output.push_str(&format!(
                "    {:34} {:23} {:>16}\n",
                month.month_label,
                if month.is_active_month {
                    ""
                } else {
                    "(nicht bewohnt)"
                },
                format_amount(month.amount, self.currency),
            ));
        }
        output.push_str(&format!(
            "    {:58} {:>16}\n",
            "Summe Vorauszahlungen",
            format_amount(settlement.prepayments.total, self.currency)
        ));
    }

    fn print_balance(&self, output: &mut String, settlement: &TenantSettlement) {
        let label = if settlement.is_back_payment() {
            "Nachzahlung"
        } else if settlement.is_credit() {
            "Guthaben"
        } else {
            "Ausgeglichen"
        };
        output.push_str(&format!(
            "    {:58} {:>16}\n",
            label,
            format_amount(settlement.balance.abs(), self.currency)
        ));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{BillingPeriod, DistributionMethod, PrepaymentSummary};

    fn settlement() -> TenantSettlement {
        TenantSettlement {
            tenant_id: "A".to_string(),
            unit_id: "W1".to_string(),
            period: BillingPeriod::new(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            ),
            occupied_days: 365,
            cost_lines: vec![CostLine {
                cost_id: "k1".to_string(),
                description: "Gebäudereinigung und Ungezieferbekämpfung im Treppenhaus".to_string(),
                method: DistributionMethod::PerArea,
                amount: dec!(1234.5),
            }],
            total_costs: dec!(1234.5),
            prepayments: PrepaymentSummary::empty(),
            balance: dec!(1234.5),
        }
    }

    #[test]
    fn prints_sections_and_balance() {
        let out = SettlementPrinter::new(Currency::EUR).print(&[settlement()]);
        assert!(out.starts_with("; --- Mieter A (Wohnung W1) ---"));
        assert!(out.contains("Pro Fläche"));
        assert!(out.contains("Summe Kosten"));
        assert!(out.contains("Nachzahlung"));
        assert!(out.contains("1,234.50"));
    }

    #[test]
    fn wraps_long_descriptions() {
        let out = SettlementPrinter::new(Currency::EUR).print(&[settlement()]);
        assert!(out.contains("\n    Ungezieferbekämpfung im\n    Treppenhaus\n"));
    }
}
