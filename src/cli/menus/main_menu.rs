use crate::cli::commands::{account, report, transaction};
use crate::cli::core::{CommandResult, ShellContext};

use super::{inventory_menu, run_menu, MenuAction, MenuEntry};

const TITLE: &str = "WELCOME TO YOUR ACCOUNTING SYSTEM MENU!";

pub fn entries() -> [MenuEntry; 6] {
    [
        MenuEntry::new("Add an account", MenuAction::Run(account::handle_add)),
        MenuEntry::new(
            "Add a transaction",
            MenuAction::Run(transaction::handle_add),
        ),
        MenuEntry::new(
            "Inventory Management",
            MenuAction::Submenu(inventory_menu::show),
        ),
        MenuEntry::new("Generate your report", MenuAction::Run(show_report)),
        MenuEntry::new("Check your balance", MenuAction::Run(show_balances)),
        MenuEntry::new("Exit", MenuAction::Exit),
    ]
}

pub fn show(context: &mut ShellContext) -> CommandResult {
    run_menu(context, TITLE, &entries())
}

fn show_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    report::print_report(context)
}

fn show_balances(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    report::print_balances(context)
}
