//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::Formatter;
use crate::tableau::MoveOutcome;

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn render(&self, outcome: &MoveOutcome) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(vec![
            "Workbook",
            "Workbook ID",
            "From Project",
            "From Project ID",
            "To Project",
            "To Project ID",
            "Last Updated",
        ]);

        let source_name = if outcome.source_project_name.is_empty() {
            "-"
        } else {
            outcome.source_project_name.as_str()
        };

        let updated = outcome
            .workbook_updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            outcome.workbook_name.as_str(),
            outcome.workbook_id.as_str(),
            source_name,
            outcome.source_project_id.as_str(),
            outcome.destination_project_name.as_str(),
            outcome.destination_project_id.as_str(),
            updated.as_str(),
        ]);

        table.to_string()
    }
}
