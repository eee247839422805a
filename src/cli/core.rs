//! Command dispatch, argument collection and error reporting for the shell.

use std::io;

use dialoguer::theme::ColorfulTheme;
use rust_decimal::Decimal;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::ConfigManager,
    core::AccountingSystem,
    currency::parse_amount,
    errors::{BookError, CliError, ConfigError},
    ledger::TransactionKind,
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Book(#[from] BookError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    /// Builds a shell around an empty ledger, loading preferences from the default location.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_parts(mode, AccountingSystem::new(), config_manager)
    }

    pub fn with_parts(
        mode: CliMode,
        books: AccountingSystem,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        Ok(ShellContext {
            mode,
            registry,
            books,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and runs one input line without going through the line editor.
    pub fn process_line(&mut self, line: &str) -> Result<bool, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(true);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(true);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());
        let control = self.dispatch(&command, raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control == LoopControl::Continue)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit the accounting system?", true)
    }

    /// Prints a failed command. Ledger conditions are warnings; the session always continues.
    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::Book(BookError::InvalidInput(message))
            | CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Book(condition) => cli_io::print_warning(condition),
            other => cli_io::print_error(other),
        }
    }

    /// Parses `args[index]`, or prompts for it interactively (re-prompting until it parses).
    pub(crate) fn parsed_arg<T>(
        &self,
        args: &[&str],
        index: usize,
        prompt: &str,
        usage: &str,
        parse: fn(&str) -> Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        if let Some(value) = args.get(index) {
            return parse(value);
        }
        if self.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
        }
        cli_io::prompt_parsed(&self.theme, prompt, parse)
    }
}

pub(crate) fn parse_money(raw: &str) -> Result<Decimal, CommandError> {
    let amount = parse_amount(raw).map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid amount", raw.trim()))
    })?;
    if amount < Decimal::ZERO {
        return Err(CommandError::InvalidArguments(
            "amount must not be negative".into(),
        ));
    }
    Ok(amount)
}

pub(crate) fn parse_quantity(raw: &str) -> Result<u32, CommandError> {
    raw.trim().parse::<u32>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "`{}` is not a valid quantity (whole number expected)",
            raw.trim()
        ))
    })
}

pub(crate) fn parse_kind(raw: &str) -> Result<TransactionKind, CommandError> {
    raw.parse::<TransactionKind>().map_err(|_| {
        CommandError::InvalidArguments(
            "Invalid transaction type, please enter debit or credit".into(),
        )
    })
}

pub(crate) fn parse_name(raw: &str) -> Result<String, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(CommandError::InvalidArguments("name must not be empty".into()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_context() -> (ShellContext, tempfile::TempDir) {
        let home = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
        let context =
            ShellContext::with_parts(CliMode::Script, AccountingSystem::new(), manager).unwrap();
        (context, home)
    }

    #[test]
    fn script_lines_drive_the_books() {
        let (mut context, _home) = script_context();
        context.process_line("account add Cash").unwrap();
        context
            .process_line("transaction add Cash 12.50 CREDIT")
            .unwrap();
        context.process_line("inventory add \"Blue Widget\" 5 2").unwrap();

        assert_eq!(
            context.books.account("Cash").unwrap().balance,
            Decimal::new(1250, 2)
        );
        assert_eq!(context.books.item("Blue Widget").unwrap().quantity, 5);
        assert_eq!(context.last_command.as_deref(), Some("inventory add \"Blue Widget\" 5 2"));
    }

    #[test]
    fn soft_failures_surface_as_book_errors() {
        let (mut context, _home) = script_context();
        let err = context
            .process_line("transaction add Ghost 1 debit")
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::AccountNotFound(ref name)) if name == "Ghost"
        ));
    }

    #[test]
    fn missing_arguments_in_script_mode_report_usage() {
        let (mut context, _home) = script_context();
        let err = context.process_line("inventory add Widget").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(ref msg) if msg.starts_with("usage:")));
    }

    #[test]
    fn invalid_kind_never_reaches_the_ledger() {
        let (mut context, _home) = script_context();
        context.process_line("account add Cash").unwrap();
        let err = context
            .process_line("transaction add Cash 5 refund")
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert!(context.books.transactions().is_empty());
    }

    #[test]
    fn exit_stops_the_session() {
        let (mut context, _home) = script_context();
        assert!(!context.process_line("exit").unwrap());
        assert!(!context.running);
    }

    #[test]
    fn unknown_commands_do_not_fail() {
        let (mut context, _home) = script_context();
        assert!(context.process_line("reprot").unwrap());
    }

    #[test]
    fn parsers_reject_bad_input() {
        assert!(parse_money("-1").is_err());
        assert!(parse_money("abc").is_err());
        assert_eq!(parse_money("$3.10").unwrap(), Decimal::new(310, 2));
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("-2").is_err());
        assert_eq!(parse_quantity(" 8 ").unwrap(), 8);
        assert!(parse_name("  ").is_err());
    }
}
