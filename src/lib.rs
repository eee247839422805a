#![doc(test(attr(deny(warnings))))]

//! Bookkeeper keeps named account balances, a chronological transaction log and a
//! priced inventory in memory, and renders them as plain-text reports.
//!
//! ```
//! use bookkeeper::{AccountingSystem, TransactionKind};
//! use rust_decimal::Decimal;
//!
//! let mut books = AccountingSystem::new();
//! books.create_account("Cash").unwrap();
//! books
//!     .record_transaction("Cash", Decimal::new(1250, 2), TransactionKind::Credit)
//!     .unwrap();
//! assert_eq!(
//!     books.list_account_balances().to_string(),
//!     "Account: Cash, Balance: $12.50"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use crate::core::AccountingSystem;
pub use errors::{BookError, BookResult};
pub use ledger::{Account, InventoryItem, Transaction, TransactionKind};

/// Installs the tracing subscriber once and emits a startup debug event.
pub fn init(log_filter: Option<&str>) {
    utils::init_tracing(log_filter);
    tracing::debug!("Bookkeeper tracing initialized.");
}
