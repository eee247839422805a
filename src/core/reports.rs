//! Text renderings of the ledger and the inventory.
//!
//! Reports borrow the system's collections and produce their lines lazily.
//! `lines()` can be called any number of times; each call starts over.

use std::{fmt, iter};

use rust_decimal::Decimal;

use crate::currency::format_money;
use crate::ledger::{Account, InventoryItem, Transaction};

pub const NO_TRANSACTIONS_LINE: &str = "There are no transaction records";
pub const EMPTY_INVENTORY_LINE: &str = "Inventory is empty";

/// Chronological transaction listing followed by account balances.
#[derive(Debug, Clone)]
pub struct LedgerReport<'a> {
    transactions: Vec<&'a Transaction>,
    accounts: &'a [Account],
}

impl<'a> LedgerReport<'a> {
    pub fn new(transactions: &'a [Transaction], accounts: &'a [Account]) -> Self {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        // Stable: equal timestamps keep the order they were recorded in.
        sorted.sort_by_key(|txn| txn.timestamp);
        Self {
            transactions: sorted,
            accounts,
        }
    }

    pub fn transactions(&self) -> &[&'a Transaction] {
        &self.transactions
    }

    pub fn accounts(&self) -> &'a [Account] {
        self.accounts
    }

    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let placeholder = (!self.has_transactions()).then(|| NO_TRANSACTIONS_LINE.to_string());
        placeholder
            .into_iter()
            .chain(self.transactions.iter().map(|txn| txn.to_string()))
            .chain(self.accounts.iter().map(Account::to_string))
    }
}

impl fmt::Display for LedgerReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(f, self.lines())
    }
}

/// Every account balance in registration order.
#[derive(Debug, Clone, Copy)]
pub struct BalanceSheet<'a> {
    accounts: &'a [Account],
}

impl<'a> BalanceSheet<'a> {
    pub fn new(accounts: &'a [Account]) -> Self {
        Self { accounts }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let accounts = self.accounts;
        accounts.iter().map(Account::to_string)
    }
}

impl fmt::Display for BalanceSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(f, self.lines())
    }
}

/// Stock listing with a grand total.
#[derive(Debug, Clone, Copy)]
pub struct InventoryReport<'a> {
    items: &'a [InventoryItem],
}

impl<'a> InventoryReport<'a> {
    pub fn new(items: &'a [InventoryItem]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'a [InventoryItem] {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's total value; zero for an empty inventory.
    pub fn total_value(&self) -> Decimal {
        self.items.iter().map(InventoryItem::total_value).sum()
    }

    pub fn total_line(&self) -> String {
        format!("Total Inventory Value: {}", format_money(self.total_value()))
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let items = self.items;
        let placeholder = items
            .is_empty()
            .then(|| EMPTY_INVENTORY_LINE.to_string());
        let total = *self;
        placeholder
            .into_iter()
            .chain(items.iter().map(InventoryItem::to_string))
            .chain(iter::once_with(move || total.total_line()))
    }
}

impl fmt::Display for InventoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(f, self.lines())
    }
}

fn write_lines(f: &mut fmt::Formatter<'_>, lines: impl Iterator<Item = String>) -> fmt::Result {
    for (index, line) in lines.enumerate() {
        if index > 0 {
            f.write_str("\n")?;
        }
        f.write_str(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use chrono::{TimeZone, Utc};

    #[test]
    fn equal_timestamps_keep_recording_order() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let first = Transaction::new("A", Decimal::ONE, TransactionKind::Credit, at);
        let second = Transaction::new("B", Decimal::new(2, 0), TransactionKind::Debit, at);
        let log = vec![first.clone(), second.clone()];

        let report = LedgerReport::new(&log, &[]);

        let ids: Vec<_> = report.transactions().iter().map(|txn| txn.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn inventory_lines_are_restartable() {
        let items = vec![InventoryItem::new("Cog", 2, Decimal::new(150, 2))];
        let report = InventoryReport::new(&items);

        let first: Vec<String> = report.lines().collect();
        let second: Vec<String> = report.lines().collect();

        assert_eq!(first, second);
        assert_eq!(first.last().unwrap(), "Total Inventory Value: $3.00");
    }

    #[test]
    fn empty_inventory_renders_placeholder_and_zero_total() {
        let report = InventoryReport::new(&[]);
        assert_eq!(
            report.to_string(),
            "Inventory is empty\nTotal Inventory Value: $0.00"
        );
    }
}
