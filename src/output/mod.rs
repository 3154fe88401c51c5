//! Output formatting module
//!
//! Renders the move summary as table, CSV, JSON or YAML.

mod csv;
mod json;
mod table;

use crate::cli::OutputFormat;
use crate::tableau::MoveOutcome;

pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the outcome of a move
    fn render(&self, outcome: &MoveOutcome) -> String;
}

/// Pick the formatter for a format
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Print the move summary to stdout
pub fn output_move_outcome(outcome: &MoveOutcome, format: OutputFormat) {
    println!("{}", formatter_for(format).render(outcome));
}

#[cfg(test)]
pub(crate) fn sample_outcome() -> MoveOutcome {
    MoveOutcome {
        workbook_id: "w1".to_string(),
        workbook_name: "Report A".to_string(),
        source_project_id: "p1".to_string(),
        source_project_name: "Marketing".to_string(),
        destination_project_id: "p2".to_string(),
        destination_project_name: "Sales".to_string(),
        workbook_updated_at: "2016-08-05T09:12:00Z".parse().ok(),
    }
}
