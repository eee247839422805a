//! Numbered menus for guided, prompt-driven use of the shell.

pub mod inventory_menu;
pub mod main_menu;

use dialoguer::{theme::ColorfulTheme, Select};

use crate::cli::core::{CommandError, CommandResult, ShellContext};

/// What a menu entry does once picked.
#[derive(Clone, Copy)]
pub enum MenuAction {
    Run(fn(&mut ShellContext, &[&str]) -> CommandResult),
    Submenu(fn(&mut ShellContext) -> CommandResult),
    Back,
    Exit,
}

#[derive(Clone, Copy)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuEntry {
    pub const fn new(label: &'static str, action: MenuAction) -> Self {
        Self { label, action }
    }
}

/// Numbered labels, e.g. `1. Add an account`.
pub fn numbered_labels(entries: &[MenuEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {}", index + 1, entry.label))
        .collect()
}

/// Shows `entries` until the user goes back, exits, or presses ESC.
///
/// Failed actions are reported and the menu is shown again.
pub(crate) fn run_menu(
    context: &mut ShellContext,
    title: &str,
    entries: &[MenuEntry],
) -> CommandResult {
    let labels = numbered_labels(entries);
    loop {
        let Some(index) = choose(&context.theme, title, &labels)? else {
            return Ok(());
        };
        let outcome = match entries[index].action {
            MenuAction::Run(handler) => handler(context, &[]),
            MenuAction::Submenu(open) => open(context),
            MenuAction::Back => return Ok(()),
            MenuAction::Exit => return Err(CommandError::ExitRequested),
        };
        match outcome {
            Ok(()) => {}
            Err(CommandError::ExitRequested) => return Err(CommandError::ExitRequested),
            Err(err) => context.report_error(err),
        }
    }
}

fn choose(
    theme: &ColorfulTheme,
    title: &str,
    labels: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(title)
        .items(labels)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_numbered_from_one() {
        let entries = [
            MenuEntry::new("Check inventory", MenuAction::Back),
            MenuEntry::new("Return to main menu", MenuAction::Back),
        ];
        assert_eq!(
            numbered_labels(&entries),
            vec!["1. Check inventory", "2. Return to main menu"]
        );
    }
}
