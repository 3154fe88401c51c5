//! JSON and YAML output formatters

use super::Formatter;
use crate::tableau::MoveOutcome;

/// Formatter for JSON output
pub struct JsonFormatter;

/// Formatter for YAML output
pub struct YamlFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, outcome: &MoveOutcome) -> String {
        serde_json::to_string_pretty(outcome)
            .unwrap_or_else(|e| format!("Error serializing to JSON: {}", e))
    }
}

impl Formatter for YamlFormatter {
    fn render(&self, outcome: &MoveOutcome) -> String {
        serde_yml::to_string(outcome)
            .unwrap_or_else(|e| format!("Error serializing to YAML: {}", e))
    }
}
