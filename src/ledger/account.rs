use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::format_money;

/// A named account carrying a running balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub balance: Decimal,
}

impl Account {
    /// Creates a new account with a zero balance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Adds `amount` to the balance. The sign is trusted as given.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Subtracts `amount` from the balance. Balances may go negative.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account: {}, Balance: {}",
            self.name,
            format_money(self.balance)
        )
    }
}
