//! CSV output formatter

use super::Formatter;
use crate::tableau::MoveOutcome;

/// Formatter for CSV output
pub struct CsvFormatter;

/// Escape a value for CSV output
/// Quotes values holding a comma, quote, CR or LF (RFC 4180)
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl Formatter for CsvFormatter {
    fn render(&self, outcome: &MoveOutcome) -> String {
        let header = "workbook_name,workbook_id,source_project_name,source_project_id,\
                      destination_project_name,destination_project_id,workbook_updated_at";
        let updated = outcome
            .workbook_updated_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        let row = [
            &outcome.workbook_name,
            &outcome.workbook_id,
            &outcome.source_project_name,
            &outcome.source_project_id,
            &outcome.destination_project_name,
            &outcome.destination_project_id,
            &updated,
        ]
        .iter()
        .map(|v| escape_csv(v))
        .collect::<Vec<_>>()
        .join(",");

        format!("{}\n{}", header, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_outcome;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_newline() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
    }

    #[test]
    fn test_escape_csv_with_carriage_return() {
        assert_eq!(escape_csv("has\rreturn"), "\"has\rreturn\"");
    }

    #[test]
    fn test_csv_render() {
        let rendered = CsvFormatter.render(&sample_outcome());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("workbook_name,workbook_id"));
        assert_eq!(
            lines[1],
            "Report A,w1,Marketing,p1,Sales,p2,2016-08-05T09:12:00+00:00"
        );
    }

    #[test]
    fn test_csv_render_escapes_names() {
        let mut outcome = sample_outcome();
        outcome.workbook_name = "Q1, Q2".to_string();
        let rendered = CsvFormatter.render(&outcome);
        assert!(rendered.contains("\"Q1, Q2\",w1"));
    }
}
