use colored::Colorize;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
    /// Report rows, printed verbatim.
    Plain,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
            quiet_mode: config.quiet_mode,
        }
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Info | MessageKind::Hint)
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Hint => ("HINT", "[?]"),
        MessageKind::Section | MessageKind::Plain => ("", ""),
    }
}

/// Formats a message for the given kind without printing it.
pub fn render(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Plain => text,
        _ => {
            let (label, icon) = build_label(kind);
            if prefs.screen_reader_mode {
                format!("{label}: {text}")
            } else {
                format!("{label}: {icon} {text}")
            }
        }
    };

    if prefs.screen_reader_mode {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Success
            | MessageKind::Warning
            | MessageKind::Error
            | MessageKind::Section => formatted.bold().to_string(),
            _ => formatted,
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info | MessageKind::Plain => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    let formatted = render(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn plain(line: impl fmt::Display) {
    print(MessageKind::Plain, line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_reader_mode_drops_icons_and_colour() {
        let prefs = OutputPreferences {
            screen_reader_mode: true,
            ..OutputPreferences::default()
        };
        assert_eq!(
            render(MessageKind::Warning, "Account 'X' does not exist", &prefs),
            "WARNING: Account 'X' does not exist"
        );
    }

    #[test]
    fn plain_rows_are_verbatim() {
        colored::control::set_override(false);
        let prefs = OutputPreferences::default();
        assert_eq!(
            render(MessageKind::Plain, "Account: A, Balance: $1.00", &prefs),
            "Account: A, Balance: $1.00"
        );
        assert_eq!(render(MessageKind::Section, " Report ", &prefs), "=== Report ===");
    }

    #[test]
    fn quiet_mode_skips_chatter_only() {
        let prefs = OutputPreferences {
            quiet_mode: true,
            ..OutputPreferences::default()
        };
        assert!(should_skip(MessageKind::Info, &prefs));
        assert!(!should_skip(MessageKind::Warning, &prefs));
        assert!(!should_skip(MessageKind::Plain, &prefs));
    }
}
