//! Client for the budgeting REST API
//!
//! [`ApiClient`] owns the transport; the endpoint bindings are grouped by
//! resource in the submodules as additional `impl ApiClient` blocks.

mod accounts;
mod budgets;
mod categories;
pub mod client;
mod months;
mod payees;
mod scheduled;
mod source;
pub mod transactions;
mod user;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use transactions::{TransactionQuery, TransactionScope};
