pub mod account;
pub mod config;
pub mod inventory;
pub mod menu;
pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(account::definitions());
    commands.extend(transaction::definitions());
    commands.extend(inventory::definitions());
    commands.extend(report::definitions());
    commands.extend(menu::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}
