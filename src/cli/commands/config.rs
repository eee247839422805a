use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

const USAGE: &str = "config <show|set> [key] [value]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change shell preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show(context),
        [sub] if sub.eq_ignore_ascii_case("show") => show(context),
        [sub, key, value @ ..] if sub.eq_ignore_ascii_case("set") && !value.is_empty() => {
            set(context, key, &value.join(" "))
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {USAGE} (keys: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::plain(format!("  {:<20} {}", key, value));
    }
    io::print_info(format!("Stored at {}", context.config_manager.path().display()));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    context.config = updated;
    io::apply_config(&context.config);
    io::print_success("Configuration updated.");
    Ok(())
}
