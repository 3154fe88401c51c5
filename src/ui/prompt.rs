//! Interactive prompts for names and passwords

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::error::{Result, TabError};

/// Ask for a non-empty line of text
pub fn prompt_text(label: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()
        .map_err(|e| TabError::Prompt(format!("Failed to read {}: {}", label, e)))?;

    Ok(value.trim().to_string())
}

/// Ask for a password without echoing it
pub fn prompt_password(label: &str) -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact()
        .map_err(|e| TabError::Prompt(format!("Failed to read {}: {}", label, e)))
}

/// Use the given value, or prompt for it when absent
///
/// In batch mode a missing value is an error naming the flag to use.
pub fn value_or_prompt(
    value: Option<&str>,
    label: &str,
    flag: &str,
    batch: bool,
) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ if batch => Err(TabError::Config(format!(
            "{} is required in batch mode (use {})",
            label, flag
        ))),
        _ => prompt_text(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_or_prompt_uses_value() {
        let value = value_or_prompt(Some("Report A"), "Workbook", "--workbook", true).unwrap();
        assert_eq!(value, "Report A");
    }

    #[test]
    fn test_value_or_prompt_trims_value() {
        let value = value_or_prompt(Some("  Sales "), "Project", "--project", true).unwrap();
        assert_eq!(value, "Sales");
    }

    #[test]
    fn test_value_or_prompt_batch_missing() {
        match value_or_prompt(None, "Destination project", "--project", true) {
            Err(TabError::Config(msg)) => {
                assert!(msg.contains("Destination project"));
                assert!(msg.contains("--project"));
            }
            other => panic!("Expected TabError::Config, got {:?}", other),
        }
    }

    #[test]
    fn test_value_or_prompt_batch_blank() {
        assert!(value_or_prompt(Some("   "), "Workbook", "--workbook", true).is_err());
    }
}
