use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::menus::main_menu;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "menu",
        "Open the numbered main menu",
        "menu",
        cmd_menu,
    )]
}

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode() != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "menu is only available in interactive mode".into(),
        ));
    }
    main_menu::show(context)
}
