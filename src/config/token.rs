//! API token handling
//!
//! The personal access token is the only secret the tool touches. It is kept
//! in a wrapper that zeroes its memory on drop and never prints its contents.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A bearer token for the budgeting API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a token, trimming surrounding whitespace
    pub fn new(token: impl Into<String>) -> Self {
        let mut raw = token.into();
        let trimmed = raw.trim().to_string();
        raw.zeroize();
        Self(trimmed)
    }

    /// Get the token contents
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masked form safe for display: the last four characters only
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken")
            .field("len", &self.0.len())
            .finish()
    }
}

impl From<String> for ApiToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
