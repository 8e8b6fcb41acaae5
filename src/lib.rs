//! clinab - Command-line client for the YNAB budgeting API
//!
//! This library provides the building blocks of the `clinab` binary: a typed
//! HTTP client for the budgeting service, the resolver that turns
//! human-friendly names into entity identifiers, exact milliunit money
//! handling, and the terminal renderers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `api`: HTTP client and one module per API resource
//! - `cli`: clap subcommands and their handlers
//! - `config`: Configuration paths, settings file and API token
//! - `display`: Table, detail and structured (JSON/YAML) output
//! - `error`: Custom error types
//! - `models`: Data exchanged with the service, money and identifiers
//! - `services`: Name/ID resolution
//!
//! # Example
//!
//! ```rust,ignore
//! use clinab::api::ApiClient;
//! use clinab::config::ApiToken;
//! use clinab::services::Resolver;
//!
//! let client = ApiClient::new(clinab::api::DEFAULT_BASE_URL, &ApiToken::new(token))?;
//! let budget_id = Resolver::new(&client).resolve_budget("Household")?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ClinabError, ClinabResult};
