//! Formatted comparison table and value cards.
//!
//! Only text is produced here; markup and styling belong to the host.

use std::fmt;

use crate::calculator::{CalculatorInputs, DerivedMetrics, ThemeConfig};
use crate::format::{
    display_floor, format_currency, format_days, format_factor, format_hours, format_number,
    format_percent, format_signed_currency,
};

/// Target of the call-to-action link. No parameters are attached.
pub const CTA_URL: &str = "https://app.incaseof.law";

/// One row of the traditional-vs-new comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: String,
    pub description: Option<String>,
    pub traditional: String,
    pub new_process: String,
    /// Whether the new process wins this row
    pub new_is_better: bool,
}

impl ComparisonRow {
    fn new(label: &str, traditional: String, new_process: String) -> Self {
        Self {
            label: label.to_string(),
            description: None,
            traditional,
            new_process,
            new_is_better: true,
        }
    }

    fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn better_if(mut self, new_is_better: bool) -> Self {
        self.new_is_better = new_is_better;
        self
    }
}

/// Highlighted figure next to the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCard {
    pub title: String,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub heading: String,
    pub rows: Vec<ComparisonRow>,
    pub footer: ComparisonRow,
    pub cards: Vec<ValueCard>,
    pub cta_label: String,
    pub cta_url: &'static str,
}

impl ComparisonReport {
    pub fn build(inputs: &CalculatorInputs, m: &DerivedMetrics, theme: &ThemeConfig) -> Self {
        let rows = vec![
            ComparisonRow::new(
                "Kosten",
                format_currency(display_floor(m.legacy_external_costs()), 0),
                format_currency(display_floor(m.total_new_fees), 0),
            )
            .described("Material, Mitgliedschaften, Inkasso, Evidenzhaltung")
            .better_if(m.total_new_fees <= m.legacy_external_costs()),
            ComparisonRow::new(
                "Rückholquote",
                format_percent(m.legacy_recovery_rate_pct),
                format_percent(m.new_recovery_rate_pct),
            )
            .described("Anteil der erfolgreich eingeholten Forderungen")
            .better_if(m.new_recovery_rate_pct >= m.legacy_recovery_rate_pct),
            ComparisonRow::new(
                "Mehr zurückgeholt",
                String::new(),
                format_signed_currency(display_floor(m.additional_recovered), 0),
            ),
            ComparisonRow::new(
                "Zeit gespart",
                format_hours(m.legacy_hours),
                format_hours(m.new_hours),
            )
            .described("Interne Arbeitszeit pro Jahr")
            .better_if(m.new_hours <= m.legacy_hours),
            ComparisonRow::new(
                "Eintreibungszeit",
                format_days(theme.legacy_collection_days),
                format_days(theme.new_collection_days),
            )
            .described("Durchschnittliche Dauer bis Zahlung")
            .better_if(theme.new_collection_days <= theme.legacy_collection_days),
        ];

        // Only the new-process cost is floored: credits beyond its own cost never
        // lift net revenue above the claim volume.
        let shown_net_new = m.total_claim_volume - display_floor(m.total_new);
        let footer = ComparisonRow::new(
            "Netto mehr Umsatz / Jahr",
            format_currency(m.net_revenue_legacy, 0),
            format_currency(shown_net_new, 0),
        )
        .better_if(shown_net_new >= m.net_revenue_legacy);

        let saving = display_floor(m.yearly_saving).round();
        let cards = vec![
            ValueCard {
                title: "Liquiditäts-Boost".to_string(),
                value: format_signed_currency(saving, 0),
                caption: "mehr Liquidität pro Jahr".to_string(),
            },
            ValueCard {
                title: "Zeit-Gewinn".to_string(),
                value: format!("{} Arbeitstage/Jahr", format_number(display_floor(m.saved_days), 0)),
                caption: format!(
                    "Vorher {} / Nachher {}",
                    format_hours(m.legacy_hours),
                    format_hours(m.new_hours)
                ),
            },
            ValueCard {
                title: "Kompensations-Faktor".to_string(),
                value: format_factor(m.compensation_factor),
                caption: format!(
                    "Eine nicht eingetriebene Forderung frisst den Gewinn aus {} erfolgreichen Aufträgen.",
                    m.compensation_factor
                ),
            },
        ];

        Self {
            heading: format!(
                "Kostenvergleich für {} Fälle/Jahr",
                format_number(inputs.cases_per_year as f64, 0)
            ),
            rows,
            footer,
            cards,
            cta_label: format!("Jetzt {} sichern", format_currency(saving, 0)),
            cta_url: CTA_URL,
        }
    }

    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{:<26} {:>18} {:>18}", "", "Traditionell", "incaseof.law")?;
        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            writeln!(
                f,
                "{:<26} {:>18} {:>18}",
                row.label, row.traditional, row.new_process
            )?;
        }
        writeln!(f)?;
        for card in &self.cards {
            writeln!(f, "{}: {} ({})", card.title, card.value, card.caption)?;
        }
        write!(f, "{} -> {}", self.cta_label, self.cta_url)
    }
}
