//! User endpoint

use serde::Deserialize;

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::User;

#[derive(Debug, Deserialize)]
struct UserData {
    user: User,
}

impl ApiClient {
    /// Get the user the token belongs to
    pub fn get_user(&self) -> ClinabResult<User> {
        let data: UserData = self.get("/user", &[])?;
        Ok(data.user)
    }
}
