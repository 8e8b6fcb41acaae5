//! User settings for clinab
//!
//! Settings are read from `config.json` in the configuration directory. The
//! file is optional and never written by the tool; every field falls back to
//! a built-in default. Command-line flags and environment variables take
//! precedence over anything stored here.

use serde::{Deserialize, Serialize};

use super::paths::ClinabPaths;
use super::token::ApiToken;
use crate::api::DEFAULT_BASE_URL;
use crate::display::OutputFormat;
use crate::error::ClinabError;
use crate::models::ids::LAST_USED_BUDGET;

/// User settings for clinab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Personal access token, used when neither `--token` nor `YNAB_TOKEN` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<ApiToken>,

    /// Base URL of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Budget used when `--budget` is not given
    #[serde(default = "default_budget")]
    pub budget: String,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_budget() -> String {
    LAST_USED_BUDGET.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            budget: default_budget(),
            output: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ClinabPaths) -> Result<Self, ClinabError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ClinabError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ClinabError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        Ok(settings)
    }

    /// Settings as a JSON value with the token masked
    pub fn redacted(&self) -> serde_json::Value {
        serde_json::json!({
            "token": self.token.as_ref().map(|t| t.masked()),
            "base_url": self.base_url,
            "budget": self.budget,
            "output": self.output,
        })
    }
}
