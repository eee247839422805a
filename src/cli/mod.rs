//! Thin command shell over [`AccountingSystem`](crate::core::AccountingSystem).

pub mod commands;
pub mod core;
mod help;
pub mod io;
pub mod menus;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use shell::{detect_mode, run_cli, SCRIPT_ENV};
