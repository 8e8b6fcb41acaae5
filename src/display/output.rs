//! Output modes and the shared line formats
//!
//! Table mode is for people: formatted currency, aligned tables, `✓` and `✗`
//! status lines. The structured modes (JSON, YAML) print the raw API objects
//! with amounts left as integer milliunits, and never print status chatter.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ClinabResult;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Whether this is a machine-readable mode
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Table)
    }

    /// Serialize a value for a structured mode.
    ///
    /// Table mode has no generic rendering and falls back to JSON.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> ClinabResult<String> {
        match self {
            Self::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
            Self::Table | Self::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// Success line for table mode
pub fn format_success(message: &str) -> String {
    format!("✓ {}", message)
}

/// Error line for the given mode
pub fn format_error(format: OutputFormat, message: &str) -> String {
    if format.is_structured() {
        serde_json::json!({ "error": message }).to_string()
    } else {
        format!("✗ {}", message)
    }
}

/// Aligned `label  value` lines for a single record
pub fn format_detail(fields: &[(&str, String)]) -> String {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (label, value) in fields {
        output.push_str(&format!("  {:<width$}  {}\n", label, value, width = width));
    }
    output
}

/// Render a yes/no flag
pub fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert!(!OutputFormat::Table.is_structured());
        assert!(OutputFormat::Json.is_structured());
        assert!(OutputFormat::Yaml.is_structured());
    }

    #[test]
    fn test_render_json_keeps_milliunits() {
        let value = serde_json::json!({"name": "Checking", "balance": 1250000});
        let rendered = OutputFormat::Json.render(&value).unwrap();
        assert!(rendered.contains("\"balance\": 1250000"));
    }

    #[test]
    fn test_render_yaml() {
        let value = serde_json::json!({"name": "Checking"});
        let rendered = OutputFormat::Yaml.render(&value).unwrap();
        assert_eq!(rendered, "name: Checking");
    }

    #[test]
    fn test_format_error_modes() {
        assert_eq!(format_error(OutputFormat::Table, "boom"), "✗ boom");
        assert_eq!(
            format_error(OutputFormat::Json, "boom \"quoted\""),
            r#"{"error":"boom \"quoted\""}"#
        );
        assert_eq!(format_error(OutputFormat::Yaml, "x"), r#"{"error":"x"}"#);
    }

    #[test]
    fn test_format_detail_aligns_labels() {
        let output = format_detail(&[("ID", "a1".into()), ("Balance", "$1.00".into())]);
        assert_eq!(output, "  ID       a1\n  Balance  $1.00\n");
    }

    #[test]
    fn test_success_line() {
        assert_eq!(format_success("Done"), "✓ Done");
    }
}
