//! Ledger entities: accounts, transactions, inventory items and the clock that stamps them.

pub mod account;
pub mod inventory;
pub mod time;
pub mod transaction;

pub use account::Account;
pub use inventory::{InventoryItem, Removal, StockChange};
pub use time::{Clock, SystemClock, TIMESTAMP_FORMAT};
pub use transaction::{Transaction, TransactionKind};
