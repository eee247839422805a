//! Account registry, transaction log and inventory owned by a single context object.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::core::reports::{BalanceSheet, InventoryReport, LedgerReport};
use crate::errors::{BookError, BookResult};
use crate::ledger::{
    time::truncate_to_seconds, Account, Clock, InventoryItem, Removal, StockChange, SystemClock,
    Transaction, TransactionKind,
};

/// Owns every account, inventory item and transaction for the lifetime of the process.
///
/// Collections keep insertion order; reports iterate them in that order.
pub struct AccountingSystem {
    accounts: Vec<Account>,
    inventory: Vec<InventoryItem>,
    transactions: Vec<Transaction>,
    clock: Arc<dyn Clock>,
}

impl Default for AccountingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccountingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountingSystem")
            .field("accounts", &self.accounts.len())
            .field("inventory", &self.inventory.len())
            .field("transactions", &self.transactions.len())
            .finish_non_exhaustive()
    }
}

impl AccountingSystem {
    /// Creates an empty system stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: Vec::new(),
            inventory: Vec::new(),
            transactions: Vec::new(),
            clock,
        }
    }

    /// Registers a new account with a zero balance.
    ///
    /// Registering an existing name leaves the registry untouched and returns
    /// [`BookError::DuplicateAccount`].
    pub fn create_account(&mut self, name: &str) -> BookResult<&Account> {
        ensure_name("account name", name)?;
        if self.account(name).is_some() {
            info!(account = name, "account already registered");
            return Err(BookError::DuplicateAccount(name.to_string()));
        }
        self.accounts.push(Account::new(name));
        debug!(account = name, "account created");
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    fn account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.name == name)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Applies a credit or debit to `account_name` and logs it at the current clock time.
    pub fn record_transaction(
        &mut self,
        account_name: &str,
        amount: Decimal,
        kind: TransactionKind,
    ) -> BookResult<&Transaction> {
        let now = self.clock.now();
        self.record_transaction_at(account_name, amount, kind, now)
    }

    /// Same as [`record_transaction`](Self::record_transaction) with an explicit timestamp,
    /// for entries that belong earlier (or later) than the moment they are typed in.
    pub fn record_transaction_at(
        &mut self,
        account_name: &str,
        amount: Decimal,
        kind: TransactionKind,
        at: DateTime<Utc>,
    ) -> BookResult<&Transaction> {
        if amount < Decimal::ZERO {
            return Err(BookError::InvalidInput(
                "amount must not be negative".into(),
            ));
        }
        let Some(account) = self.account_mut(account_name) else {
            info!(account = account_name, "transaction skipped, unknown account");
            return Err(BookError::AccountNotFound(account_name.to_string()));
        };
        match kind {
            TransactionKind::Credit => account.credit(amount),
            TransactionKind::Debit => account.debit(amount),
        }
        let transaction = Transaction::new(account_name, amount, kind, truncate_to_seconds(at));
        debug!(
            id = %transaction.id,
            account = account_name,
            %amount,
            %kind,
            "transaction recorded"
        );
        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Adds stock. Repeat adds only raise the quantity; the stored price is kept.
    pub fn add_inventory_item(
        &mut self,
        name: &str,
        quantity: u32,
        unit_price: Decimal,
    ) -> BookResult<StockChange> {
        ensure_name("item name", name)?;
        ensure_price(unit_price)?;
        if let Some(item) = self.item_mut(name) {
            item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                BookError::InvalidInput(format!("quantity for '{name}' would overflow"))
            })?;
            debug!(item = name, quantity = item.quantity, "inventory restocked");
            return Ok(StockChange::Restocked {
                quantity: item.quantity,
            });
        }
        self.inventory
            .push(InventoryItem::new(name, quantity, unit_price));
        debug!(item = name, quantity, %unit_price, "inventory item added");
        Ok(StockChange::Added)
    }

    /// Takes `quantity` units out of stock, dropping the item once none remain.
    pub fn remove_inventory_item(&mut self, name: &str, quantity: u32) -> BookResult<Removal> {
        if quantity == 0 {
            return Err(BookError::InvalidInput(
                "quantity to remove must be greater than zero".into(),
            ));
        }
        let Some(index) = self.inventory.iter().position(|item| item.name == name) else {
            info!(item = name, "removal skipped, unknown item");
            return Err(BookError::ItemNotFound(name.to_string()));
        };
        let item = &mut self.inventory[index];
        if item.quantity < quantity {
            info!(item = name, requested = quantity, available = item.quantity, "insufficient stock");
            return Err(BookError::InsufficientStock {
                name: name.to_string(),
                requested: quantity,
                available: item.quantity,
            });
        }
        item.quantity -= quantity;
        let remaining = item.quantity;
        let exhausted = remaining == 0;
        if exhausted {
            self.inventory.remove(index);
        }
        debug!(item = name, removed = quantity, remaining, exhausted, "inventory removed");
        Ok(Removal {
            removed: quantity,
            remaining,
            exhausted,
        })
    }

    pub fn update_inventory_price(&mut self, name: &str, new_price: Decimal) -> BookResult<()> {
        ensure_price(new_price)?;
        let item = self.item_mut(name).ok_or_else(|| {
            info!(item = name, "price update skipped, unknown item");
            BookError::ItemNotFound(name.to_string())
        })?;
        item.unit_price = new_price;
        debug!(item = name, %new_price, "inventory price updated");
        Ok(())
    }

    pub fn item(&self, name: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.name == name)
    }

    fn item_mut(&mut self, name: &str) -> Option<&mut InventoryItem> {
        self.inventory.iter_mut().find(|item| item.name == name)
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn inventory_report(&self) -> InventoryReport<'_> {
        InventoryReport::new(&self.inventory)
    }

    /// Transactions in chronological order followed by every account balance.
    pub fn generate_report(&self) -> LedgerReport<'_> {
        LedgerReport::new(&self.transactions, &self.accounts)
    }

    pub fn list_account_balances(&self) -> BalanceSheet<'_> {
        BalanceSheet::new(&self.accounts)
    }
}

fn ensure_name(label: &str, name: &str) -> BookResult<()> {
    if name.trim().is_empty() {
        Err(BookError::InvalidInput(format!("{label} must not be empty")))
    } else {
        Ok(())
    }
}

fn ensure_price(price: Decimal) -> BookResult<()> {
    if price < Decimal::ZERO {
        Err(BookError::InvalidInput(
            "unit price must not be negative".into(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn duplicate_account_is_a_reported_no_op() {
        let mut system = AccountingSystem::new();
        system.create_account("Cash").unwrap();
        system.record_transaction("Cash", dec("10"), TransactionKind::Credit).unwrap();

        let err = system.create_account("Cash").unwrap_err();

        assert_eq!(err, BookError::DuplicateAccount("Cash".into()));
        assert_eq!(system.accounts().len(), 1);
        assert_eq!(system.account("Cash").unwrap().balance, dec("10"));
    }

    #[test]
    fn blank_account_name_is_rejected() {
        let mut system = AccountingSystem::new();
        assert!(matches!(
            system.create_account("   "),
            Err(BookError::InvalidInput(_))
        ));
        assert!(system.accounts().is_empty());
    }

    #[test]
    fn unknown_account_leaves_log_untouched() {
        let mut system = AccountingSystem::new();
        let err = system
            .record_transaction("Ghost", dec("5"), TransactionKind::Debit)
            .unwrap_err();
        assert_eq!(err, BookError::AccountNotFound("Ghost".into()));
        assert!(system.transactions().is_empty());
    }

    #[test]
    fn negative_amount_is_rejected_before_touching_balance() {
        let mut system = AccountingSystem::new();
        system.create_account("Cash").unwrap();
        assert!(system
            .record_transaction("Cash", dec("-1"), TransactionKind::Credit)
            .is_err());
        assert_eq!(system.account("Cash").unwrap().balance, Decimal::ZERO);
        assert!(system.transactions().is_empty());
    }

    #[test]
    fn timestamps_are_truncated_to_whole_seconds() {
        let mut system = AccountingSystem::new();
        system.create_account("Cash").unwrap();
        let at = Utc.timestamp_opt(1_700_000_000, 750_000_000).unwrap();
        let txn = system
            .record_transaction_at("Cash", dec("1"), TransactionKind::Credit, at)
            .unwrap();
        assert_eq!(txn.timestamp, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
    }

    #[test]
    fn exhausting_stock_removes_the_item() {
        let mut system = AccountingSystem::new();
        system.add_inventory_item("Bolt", 4, dec("0.25")).unwrap();

        let removal = system.remove_inventory_item("Bolt", 4).unwrap();

        assert!(removal.exhausted);
        assert_eq!(removal.remaining, 0);
        assert!(system.item("Bolt").is_none());
    }

    #[test]
    fn zero_quantity_removal_is_rejected() {
        let mut system = AccountingSystem::new();
        system.add_inventory_item("Bolt", 4, dec("0.25")).unwrap();
        assert!(matches!(
            system.remove_inventory_item("Bolt", 0),
            Err(BookError::InvalidInput(_))
        ));
        assert_eq!(system.item("Bolt").unwrap().quantity, 4);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut system = AccountingSystem::new();
        assert!(system.add_inventory_item("Bolt", 1, dec("-0.01")).is_err());
        system.add_inventory_item("Bolt", 1, dec("0")).unwrap();
        assert!(system.update_inventory_price("Bolt", dec("-3")).is_err());
        assert_eq!(system.item("Bolt").unwrap().unit_price, Decimal::ZERO);
    }

    #[test]
    fn price_update_requires_existing_item() {
        let mut system = AccountingSystem::new();
        assert_eq!(
            system.update_inventory_price("Nut", dec("1")),
            Err(BookError::ItemNotFound("Nut".into()))
        );
    }

    #[test]
    fn restock_overflow_is_rejected() {
        let mut system = AccountingSystem::new();
        system.add_inventory_item("Bolt", u32::MAX, dec("1")).unwrap();
        assert!(system.add_inventory_item("Bolt", 1, dec("1")).is_err());
        assert_eq!(system.item("Bolt").unwrap().quantity, u32::MAX);
    }
}
