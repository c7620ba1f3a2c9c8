use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;
use spaarwijzer::{
    defaults::{CategoryDefaults, Range},
    estimator::{Priority, SavingsReport},
    prices::EnergyPrices,
    profile::{BusinessCategory, Preference},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_prices_table(prices: &EnergyPrices) -> Table {
    let (source, color) =
        if prices.is_live { ("live", Color::Green) } else { ("indicative", Color::DarkYellow) };
    let mut table = new_table();
    table.set_header(vec!["Electricity", "Gas", "Feed-in", "Source", "Timestamp"]);
    table.add_row(vec![
        Cell::new(format!("{:.4}", prices.electricity)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.4}", prices.gas)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.4}", prices.feed_in_tariff)).set_alignment(CellAlignment::Right),
        Cell::new(source).fg(color),
        Cell::new(prices.timestamp.map_or_else(String::new, |timestamp| {
            timestamp.format("%b %d %H:%M").to_string()
        }))
        .add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_costs_table(report: &SavingsReport) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Electricity", "Gas", "Total", "Emissions"]);
    table.add_row(vec![
        Cell::new(format!("{:.0}", report.current_costs.electricity))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0}", report.current_costs.gas)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0}", report.current_costs.total))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", report.current_emissions)).set_alignment(CellAlignment::Right),
    ]);
    table
}

/// Recommendations with a summary row, marking those that address the `priorities`.
pub fn build_recommendations_table(
    report: &SavingsReport,
    priorities: EnumSet<Preference>,
) -> Table {
    let addressed = report
        .addressing(priorities)
        .into_iter()
        .map(|recommendation| recommendation.measure)
        .collect_vec();

    let mut table = new_table();
    table.set_header(vec!["Measure", "Savings", "Investment", "Payback", "CO₂", "Priority", ""]);
    for recommendation in &report.recommendations {
        table.add_row(vec![
            Cell::new(recommendation.measure),
            Cell::new(format!("{:.0}", recommendation.yearly_savings))
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
            Cell::new(format!("{:.0}", recommendation.investment))
                .set_alignment(CellAlignment::Right),
            Cell::new(recommendation.payback_years).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", recommendation.co2_reduction))
                .set_alignment(CellAlignment::Right),
            Cell::new(recommendation.priority).fg(match recommendation.priority {
                Priority::High => Color::Green,
                Priority::Medium => Color::DarkYellow,
                Priority::Low => Color::Reset,
            }),
            Cell::new(if addressed.contains(&recommendation.measure) { "★" } else { "" })
                .fg(Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", report.yearly_savings))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", report.total_investment))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(report.payback_period)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(report.co2_reduction)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
    ]);
    table
}

fn format_range<T>(range: &Range<T>, value: fn(&T) -> f64) -> String {
    format!(
        "{:.0} ≤ {:.0} ≤ {:.0}",
        value(&range.min),
        value(&range.default),
        value(&range.max),
    )
}

pub fn build_defaults_table(categories: &[Option<BusinessCategory>]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Category",
        "Floor area, m²",
        "Electricity, kWh",
        "Gas, m³",
        "Shiftable",
    ]);
    for category in categories {
        let defaults = CategoryDefaults::of(*category);
        table.add_row(vec![
            Cell::new(category.map_or("(none)", BusinessCategory::label)),
            Cell::new(format_range(&defaults.building_size, |area| area.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_range(&defaults.electricity_usage, |energy| energy.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_range(&defaults.gas_usage, |volume| volume.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}%", defaults.sector.peak_load_factor * 100.0))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use spaarwijzer::{estimator::estimate, profile::BusinessProfile};

    use super::*;

    #[test]
    fn test_recommendations_table_has_total_row() {
        let profile = BusinessProfile::for_category(Some(BusinessCategory::Office));
        let report = estimate(&profile, &EnergyPrices::indicative());
        let table = build_recommendations_table(&report, EnumSet::only(Preference::Comfort));
        assert_eq!(table.row_count(), report.recommendations.len() + 1);
        assert!(table.to_string().contains("Total"));
    }

    #[test]
    fn test_defaults_table() {
        let table = build_defaults_table(&[Some(BusinessCategory::Office), None]);
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Kantoor"));
        assert!(rendered.contains("100 ≤ 500 ≤ 5000"));
    }

    #[test]
    fn test_prices_table_marks_indicative() {
        assert!(build_prices_table(&EnergyPrices::indicative()).to_string().contains("indicative"));
    }
}
