//! Path management for clinab
//!
//! ## Path Resolution Order
//!
//! 1. `CLINAB_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory, as reported by `directories`
//!    (`~/.config/clinab` on Linux, `~/Library/Application Support/clinab` on
//!    macOS, `%APPDATA%\clinab\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ClinabError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CLINAB_CONFIG_DIR";

/// Manages all paths used by clinab
#[derive(Debug, Clone)]
pub struct ClinabPaths {
    /// Directory holding the settings file
    config_dir: PathBuf,
}

impl ClinabPaths {
    /// Create a new ClinabPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, ClinabError> {
        if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            if !custom.is_empty() {
                return Ok(Self::with_config_dir(PathBuf::from(custom)));
            }
        }

        let dirs = ProjectDirs::from("", "", "clinab").ok_or_else(|| {
            ClinabError::Config(format!(
                "Could not determine a configuration directory; set {}",
                CONFIG_DIR_ENV
            ))
        })?;

        Ok(Self::with_config_dir(dirs.config_dir().to_path_buf()))
    }

    /// Create ClinabPaths with a custom directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the configuration directory
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClinabPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = ClinabPaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.config_dir(), temp_dir.path());
    }
}
