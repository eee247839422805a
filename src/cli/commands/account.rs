use crate::cli::core::{parse_name, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

use super::report;

const ADD_USAGE: &str = "account add <name>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "account",
        "Create accounts or list their balances",
        "account <add|list> [name]",
        cmd_account,
    )]
}

fn cmd_account(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: account <add|list> [name]".into(),
        ));
    };

    match subcommand.to_ascii_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "list" => report::print_balances(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown account subcommand `{}`",
            other
        ))),
    }
}

pub(crate) fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = context.parsed_arg(
        args,
        0,
        "Please enter the name of the new account",
        ADD_USAGE,
        parse_name,
    )?;
    context.books.create_account(&name)?;
    io::print_success(format!("Account '{}' created", name));
    Ok(())
}
