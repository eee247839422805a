use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use crossterm::tty::IsTty;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliMode, ShellContext};
use crate::cli::io as cli_io;
use crate::errors::CliError;

pub const SCRIPT_ENV: &str = "BOOKKEEPER_CLI_SCRIPT";
const PROMPT: &str = "books> ";
const FAREWELL: &str = "Thank you for using the Accounting System. Goodbye!";

/// Script mode when requested explicitly or when stdin is not a terminal.
pub fn detect_mode() -> CliMode {
    if std::env::var_os(SCRIPT_ENV).is_some() || !io::stdin().is_tty() {
        CliMode::Script
    } else {
        CliMode::Interactive
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = detect_mode();
    let mut context = ShellContext::new(mode)?;
    crate::init(context.config.log_filter.as_deref());
    tracing::debug!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context)?,
        CliMode::Script => run_script(&mut context)?,
    }
    cli_io::print_info(FAREWELL);
    Ok(())
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_names());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    cli_io::print_info("WELCOME TO YOUR ACCOUNTING SYSTEM!");
    cli_io::print_hint("Type `menu` for the guided menu or `help` to list commands.");

    while context.running {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if !handle_line(context, trimmed) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => match context.confirm_exit() {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => context.report_error(err),
            },
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if !handle_line(context, &line) {
            break;
        }
    }
    Ok(())
}

/// Runs one line; returns false once the session should end.
fn handle_line(context: &mut ShellContext, line: &str) -> bool {
    match context.process_line(line) {
        Ok(keep_going) => keep_going,
        Err(err) => {
            context.report_error(err);
            true
        }
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let needle = prefix.to_ascii_lowercase();
        self.commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        // Only the command word is completed.
        if prefix[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((start, self.candidates(&prefix[start..])))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
