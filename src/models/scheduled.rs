//! Scheduled (recurring) transaction model

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Milliunits;
use super::transaction::FlagColor;

/// How often a scheduled transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    #[value(name = "never")]
    Never,
    #[value(name = "daily")]
    Daily,
    #[value(name = "weekly")]
    Weekly,
    #[value(name = "everyOtherWeek")]
    EveryOtherWeek,
    #[value(name = "twiceAMonth")]
    TwiceAMonth,
    #[value(name = "every4Weeks")]
    #[serde(rename = "every4Weeks")]
    Every4Weeks,
    #[value(name = "monthly")]
    Monthly,
    #[value(name = "everyOtherMonth")]
    EveryOtherMonth,
    #[value(name = "every3Months")]
    #[serde(rename = "every3Months")]
    Every3Months,
    #[value(name = "every4Months")]
    #[serde(rename = "every4Months")]
    Every4Months,
    #[value(name = "twiceAYear")]
    TwiceAYear,
    #[value(name = "yearly")]
    Yearly,
    #[value(name = "everyOtherYear")]
    EveryOtherYear,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => write!(f, "{:?}", self),
        }
    }
}

/// One part of a split scheduled transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSubTransaction {
    pub id: String,
    #[serde(default)]
    pub scheduled_transaction_id: Option<String>,
    pub amount: Milliunits,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub payee_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub transfer_account_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

/// A scheduled transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTransaction {
    pub id: String,
    pub date_first: String,
    pub date_next: String,
    pub frequency: Frequency,
    pub amount: Milliunits,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub flag_color: Option<FlagColor>,
    #[serde(default)]
    pub flag_name: Option<String>,
    pub account_id: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub payee_id: Option<String>,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub transfer_account_id: Option<String>,
    #[serde(default)]
    pub subtransactions: Vec<ScheduledSubTransaction>,
    #[serde(default)]
    pub deleted: bool,
}

/// Request body for creating or replacing a scheduled transaction
#[derive(Debug, Clone, Serialize)]
pub struct SaveScheduledTransaction {
    pub account_id: String,
    pub date: String,
    pub amount: Milliunits,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_color: Option<FlagColor>,
}

impl SaveScheduledTransaction {
    /// Start a replacement from an existing scheduled transaction, keeping
    /// its next occurrence as the date
    pub fn from_existing(existing: &ScheduledTransaction) -> Self {
        Self {
            account_id: existing.account_id.clone(),
            date: existing.date_next.clone(),
            amount: existing.amount,
            frequency: existing.frequency,
            payee_id: existing.payee_id.clone(),
            payee_name: None,
            category_id: existing.category_id.clone(),
            memo: existing.memo.clone(),
            flag_color: existing.flag_color,
        }
    }
}
