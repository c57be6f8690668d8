#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::calculator::CalculationResult;

#[derive(Tabled)]
/// A single row of the result table.
struct ResultRow {
    /// The name of the reported figure.
    #[tabled(rename = "Item")]
    item:  String,
    /// The figure, formatted for display.
    #[tabled(rename = "Value")]
    value: String,
}

impl ResultRow {
    /// Creates a row from a label and a pre-formatted value.
    fn new(item: &str, value: String) -> Self {
        Self { item: item.to_string(), value }
    }
}

/// Renders a calculation result as a console table, with the final score
/// highlighted in the footer.
pub fn render_table(result: &CalculationResult) -> String {
    let rows = vec![
        ResultRow::new("Weighted Average", format!("{:.2}", result.weighted_average)),
        ResultRow::new("Attendance Penalty", format!("-{:.2}", result.penalty)),
        ResultRow::new("Extra Points", format!("+{:.2}", result.extra_points)),
        ResultRow::new("Evaluations", result.details.evaluations_count.to_string()),
        ResultRow::new(
            "Attendance Met",
            if result.details.attendance_met { "yes" } else { "no" }.to_string(),
        ),
        ResultRow::new(
            "Teachers Consensus",
            if result.details.teachers_consensus { "yes" } else { "no" }.to_string(),
        ),
    ];

    let score = result.to_string();
    let footer = format!("Final Score: {}", score.as_str().bright_green().bold());

    Table::new(&rows)
        .with(Panel::header("Grade Overview"))
        .with(Panel::footer(footer))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Serializes a calculation result to pretty-printed JSON.
pub fn render_json(result: &CalculationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Could not serialize calculation result")
}
