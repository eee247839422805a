use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::TIMESTAMP_FORMAT;
use crate::currency::format_money;
use crate::errors::BookError;

/// Direction of a balance change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = BookError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(TransactionKind::Credit),
            "debit" => Ok(TransactionKind::Debit),
            _ => Err(BookError::InvalidInput(format!(
                "transaction type must be `credit` or `debit`, got `{}`",
                raw.trim()
            ))),
        }
    }
}

/// Immutable record of one credit or debit applied to an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub amount: Decimal,
    pub description: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        account_name: &str,
        amount: Decimal,
        kind: TransactionKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            amount,
            description: format!("{kind} for {account_name}"),
            kind,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.description,
            self.kind,
            format_money(self.amount)
        )
    }
}
