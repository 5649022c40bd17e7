//! Tokenizer for dash-command lines.
//!
//! A line holds one command token, marked with a leading `-`, plus any
//! number of plain argument tokens. Tokens are separated by single spaces;
//! doubled spaces produce empty argument tokens.

use bevy::prelude::*;

/// First character of a command token.
pub const COMMAND_MARKER: char = '-';

/// A command name and its arguments, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command name, lower-cased, marker stripped.
    pub name: String,
    /// Argument tokens in their original order.
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    pub fn new(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// The first argument, if any.
    #[inline]
    pub fn first_argument(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

/// Result of tokenizing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The command to dispatch.
    pub command: ParsedCommand,
    /// Name of a second command token that ended the line early.
    ///
    /// When set, `command` carries only the arguments seen before it and the
    /// rest of the line was discarded.
    pub extra_command: Option<String>,
}

/// Tokenize error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// Empty or whitespace-only input.
    EmptyInput,
    /// No token on the line starts with [`COMMAND_MARKER`].
    MissingCommand,
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizeError::EmptyInput => write!(f, "empty input"),
            TokenizeError::MissingCommand => write!(f, "no command token"),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenize a command line.
///
/// # Syntax
///
/// - The whole line is lower-cased first
/// - Tokens are separated by single spaces
/// - A token starting with `-` names the command; all others are arguments
/// - Arguments before and after the command token both belong to it
/// - A second command token stops the walk; see [`ParsedLine::extra_command`]
///
/// # Examples
///
/// ```
/// use bevy_overlay_console::core::tokenize;
///
/// let line = tokenize("-TextColor Red").unwrap();
/// assert_eq!(line.command.name, "textcolor");
/// assert_eq!(line.command.arguments, vec!["red"]);
///
/// let line = tokenize("-textcolor -background blue").unwrap();
/// assert_eq!(line.command.name, "textcolor");
/// assert!(line.command.arguments.is_empty());
/// assert_eq!(line.extra_command.as_deref(), Some("background"));
/// ```
pub fn tokenize(input: &str) -> Result<ParsedLine, TokenizeError> {
    if input.trim().is_empty() {
        return Err(TokenizeError::EmptyInput);
    }

    let text = input.to_lowercase();
    let parts: Vec<&str> = text.split(' ').collect();
    let mut remaining = parts.len();
    debug!("Command parts: {:?} ({} total)", parts, remaining);

    let mut pending: Option<&str> = None;
    let mut arguments = Vec::new();

    for part in parts {
        remaining -= 1;

        match part.strip_prefix(COMMAND_MARKER) {
            Some(name) => {
                if let Some(first) = pending {
                    debug!("Second command '{}' with {} tokens left", name, remaining);
                    return Ok(ParsedLine {
                        command: ParsedCommand::new(first, arguments),
                        extra_command: Some(name.to_string()),
                    });
                }
                pending = Some(name);
            }
            None => arguments.push(part.to_string()),
        }
    }

    match pending {
        Some(name) => Ok(ParsedLine {
            command: ParsedCommand::new(name, arguments),
            extra_command: None,
        }),
        None => Err(TokenizeError::MissingCommand),
    }
}
