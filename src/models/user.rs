//! Authenticated user model

use serde::{Deserialize, Serialize};

/// The user owning the API token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}
