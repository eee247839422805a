use crate::cli::core::{
    parse_money, parse_name, parse_quantity, CommandError, CommandResult, ShellContext,
};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_money;
use crate::ledger::StockChange;

const USAGE: &str = "inventory <add|remove|price|show>";
const ADD_USAGE: &str = "inventory add <name> <quantity> <unit price>";
const REMOVE_USAGE: &str = "inventory remove <name> <quantity>";
const PRICE_USAGE: &str = "inventory price <name> <new unit price>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "inventory",
        "Add, remove, reprice or list stocked items",
        USAGE,
        cmd_inventory,
    )]
}

fn cmd_inventory(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
    };

    match subcommand.to_ascii_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "remove" => handle_remove(context, rest),
        "price" => handle_price(context, rest),
        "show" | "list" => handle_show(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown inventory subcommand `{}`",
            other
        ))),
    }
}

pub(crate) fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = context.parsed_arg(args, 0, "Enter item name", ADD_USAGE, parse_name)?;
    let quantity = context.parsed_arg(args, 1, "Enter quantity", ADD_USAGE, parse_quantity)?;
    let unit_price = context.parsed_arg(args, 2, "Enter unit price: $", ADD_USAGE, parse_money)?;

    match context.books.add_inventory_item(&name, quantity, unit_price)? {
        StockChange::Added => io::print_success(format!("Added '{}' to inventory", name)),
        StockChange::Restocked { quantity } => {
            io::print_success(format!("Updated quantity for '{}' in inventory", name));
            io::print_info(format!("'{}' now has {} in stock", name, quantity));
        }
    }
    Ok(())
}

pub(crate) fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = context.parsed_arg(args, 0, "Enter item name", REMOVE_USAGE, parse_name)?;
    let quantity = context.parsed_arg(
        args,
        1,
        "Enter quantity to remove",
        REMOVE_USAGE,
        parse_quantity,
    )?;

    let removal = context.books.remove_inventory_item(&name, quantity)?;
    io::print_success(format!(
        "Removed {} of '{}' from inventory",
        removal.removed, name
    ));
    if removal.exhausted {
        io::print_info(format!(
            "'{}' is now out of stock and has been removed from inventory",
            name
        ));
    }
    Ok(())
}

pub(crate) fn handle_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = context.parsed_arg(args, 0, "Enter item name", PRICE_USAGE, parse_name)?;
    let new_price = context.parsed_arg(
        args,
        1,
        "Enter new unit price: $",
        PRICE_USAGE,
        parse_money,
    )?;

    context.books.update_inventory_price(&name, new_price)?;
    io::print_success(format!(
        "Updated price for '{}' to {}",
        name,
        format_money(new_price)
    ));
    Ok(())
}

pub(crate) fn handle_show(context: &mut ShellContext) -> CommandResult {
    output::section("Current Inventory");
    for line in context.books.inventory_report().lines() {
        output::plain(line);
    }
    Ok(())
}
