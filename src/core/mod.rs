//! The in-memory accounting core and the reports it renders.

pub mod accounting_system;
pub mod reports;

pub use accounting_system::AccountingSystem;
pub use reports::{BalanceSheet, InventoryReport, LedgerReport};
