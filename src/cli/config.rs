//! Config CLI command

use crate::config::{ClinabPaths, Settings};
use crate::display::{format_detail, OutputFormat};
use crate::error::ClinabResult;

/// Show where settings are read from and their effective values
pub fn handle_config_command(
    paths: &ClinabPaths,
    settings: &Settings,
    output: OutputFormat,
) -> ClinabResult<()> {
    let redacted = settings.redacted();

    if output.is_structured() {
        let value = serde_json::json!({
            "path": paths.settings_file().display().to_string(),
            "settings": redacted,
        });
        println!("{}", output.render(&value)?);
        return Ok(());
    }

    println!(
        "{}",
        format_detail(&[
            ("Settings File", paths.settings_file().display().to_string()),
            (
                "Token",
                settings
                    .token
                    .as_ref()
                    .map(|t| t.masked())
                    .unwrap_or_else(|| "(not set)".to_string()),
            ),
            ("Base URL", settings.base_url.clone()),
            ("Budget", settings.budget.clone()),
            (
                "Output",
                redacted["output"].as_str().unwrap_or_default().to_string(),
            ),
        ])
    );
    Ok(())
}
