//! Core data models for clinab
//!
//! This module contains the data structures exchanged with the budgeting
//! service (budgets, accounts, categories, payees, transactions, months) and
//! the money and identifier primitives they are built on.

pub mod account;
pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod month;
pub mod payee;
pub mod scheduled;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountType, SaveAccount};
pub use budget::BudgetSummary;
pub use category::{
    Category, CategoryGroup, GoalType, SaveCategory, SaveCategoryGroup, SaveMonthCategory,
};
pub use currency::{BudgetSettings, CurrencyFormat, DateFormat};
pub use ids::{looks_like_canonical_id, EntityKind, DEFAULT_BUDGET, LAST_USED_BUDGET};
pub use money::{Milliunits, MoneyError};
pub use month::{MonthDetail, MonthSummary};
pub use payee::{Payee, PayeeLocation, SavePayee};
pub use scheduled::{Frequency, SaveScheduledTransaction, ScheduledTransaction};
pub use transaction::{
    ClearedStatus, FlagColor, ImportResponse, SaveTransaction, SaveTransactionsResponse,
    SubTransaction, Transaction, TransactionType,
};
pub use user::User;
