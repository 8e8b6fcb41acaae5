//! Configuration module for clinab
//!
//! This module provides configuration management including:
//! - Configuration directory resolution
//! - User settings loading
//! - API token handling

pub mod paths;
pub mod settings;
pub mod token;

pub use paths::ClinabPaths;
pub use settings::Settings;
pub use token::ApiToken;
