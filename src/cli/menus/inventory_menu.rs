use crate::cli::commands::inventory;
use crate::cli::core::{CommandResult, ShellContext};

use super::{run_menu, MenuAction, MenuEntry};

const TITLE: &str = "Inventory Management Menu";

pub fn entries() -> [MenuEntry; 5] {
    [
        MenuEntry::new(
            "Add item to inventory",
            MenuAction::Run(inventory::handle_add),
        ),
        MenuEntry::new(
            "Remove item from inventory",
            MenuAction::Run(inventory::handle_remove),
        ),
        MenuEntry::new("Update item price", MenuAction::Run(inventory::handle_price)),
        MenuEntry::new("Check inventory", MenuAction::Run(check_inventory)),
        MenuEntry::new("Return to main menu", MenuAction::Back),
    ]
}

pub fn show(context: &mut ShellContext) -> CommandResult {
    run_menu(context, TITLE, &entries())
}

fn check_inventory(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    inventory::handle_show(context)
}
