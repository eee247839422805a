use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "report",
            "Show transactions in time order followed by account balances",
            "report",
            cmd_report,
        ),
        CommandEntry::new(
            "balances",
            "Show the balance of every account",
            "balances",
            cmd_balances,
        ),
    ]
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_report(context)
}

fn cmd_balances(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_balances(context)
}

pub(crate) fn print_report(context: &ShellContext) -> CommandResult {
    output::section("Your Accounting Report");
    for line in context.books.generate_report().lines() {
        output::plain(line);
    }
    Ok(())
}

pub(crate) fn print_balances(context: &ShellContext) -> CommandResult {
    output::section("Account Balances");
    let sheet = context.books.list_account_balances();
    if sheet.is_empty() {
        io::print_info("No accounts yet. Use `account add <name>` to create one.");
    }
    for line in sheet.lines() {
        output::plain(line);
    }
    Ok(())
}
