//! Identifier handling shared by every entity kind
//!
//! The service identifies everything with hyphenated UUIDs. Users may type
//! either such an identifier or a display name; the helpers here decide which
//! one they typed.

use std::fmt;

use uuid::Uuid;

/// Budget alias for the most recently used budget
pub const LAST_USED_BUDGET: &str = "last-used";

/// Budget alias for the budget the service picks as default
pub const DEFAULT_BUDGET: &str = "default";

/// Length of a hyphenated UUID (8-4-4-4-12)
const CANONICAL_ID_LEN: usize = 36;

/// Returns true if `s` has the shape of a canonical identifier.
///
/// Only the hyphenated 8-4-4-4-12 hex form counts; hex digits may be in either
/// case. Braced, URN and simple (unhyphenated) UUID spellings are rejected.
pub fn looks_like_canonical_id(s: &str) -> bool {
    s.len() == CANONICAL_ID_LEN && Uuid::parse_str(s).is_ok()
}

/// Returns true for the service-level budget aliases
pub fn is_budget_sentinel(s: &str) -> bool {
    s == LAST_USED_BUDGET || s == DEFAULT_BUDGET
}

/// Shortened identifier used to disambiguate duplicate names in tables
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// The kinds of entity a user can refer to by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Budget,
    Account,
    Category,
    CategoryGroup,
    Payee,
}

impl EntityKind {
    /// Plural, lowercase label used when listing available names
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Budget => "budgets",
            Self::Account => "accounts",
            Self::Category => "categories",
            Self::CategoryGroup => "category groups",
            Self::Payee => "payees",
        }
    }

    /// Whether this kind lives inside a budget
    pub fn is_budget_scoped(&self) -> bool {
        !matches!(self, Self::Budget)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::Account => write!(f, "Account"),
            Self::Category => write!(f, "Category"),
            Self::CategoryGroup => write!(f, "Category group"),
            Self::Payee => write!(f, "Payee"),
        }
    }
}
