use crate::cli::core::{
    parse_kind, parse_money, parse_name, CommandError, CommandResult, ShellContext,
};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

const ADD_USAGE: &str = "transaction add <account> <amount> <credit|debit>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "transaction",
        "Record a credit or debit against an account",
        ADD_USAGE,
        cmd_transaction,
    )]
}

fn cmd_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        Some((subcommand, rest)) if subcommand.eq_ignore_ascii_case("add") => {
            handle_add(context, rest)
        }
        Some((other, _)) => Err(CommandError::InvalidArguments(format!(
            "unknown transaction subcommand `{}`",
            other
        ))),
        None => Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}"))),
    }
}

pub(crate) fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let account = context.parsed_arg(
        args,
        0,
        "Please enter the account name",
        ADD_USAGE,
        parse_name,
    )?;
    let amount = context.parsed_arg(args, 1, "Please enter the amount: $", ADD_USAGE, parse_money)?;
    let kind = context.parsed_arg(
        args,
        2,
        "Please enter the transaction type [debit / credit]",
        ADD_USAGE,
        parse_kind,
    )?;
    context.books.record_transaction(&account, amount, kind)?;
    io::print_success("Transaction added");
    Ok(())
}
