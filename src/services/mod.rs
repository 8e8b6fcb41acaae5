//! Business logic layer for clinab
//!
//! The service layer sits between the CLI handlers and the API client.

pub mod resolver;

pub use resolver::{EntityRef, EntitySource, GroupRef, Resolver};
