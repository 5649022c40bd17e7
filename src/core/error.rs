//! Errors reported by the state machine and the command dispatcher.
//!
//! None of these are fatal. Each is reported to the console output and the
//! line or transition that produced it is dropped.

use super::{ColorToken, ConsoleState, TransitionOp};

/// Every recoverable condition the console reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The operation is not legal from the current state.
    InvalidTransition { op: TransitionOp, state: ConsoleState },
    /// Embedded consoles are removed, not closed.
    UnsupportedForEmbedded { op: TransitionOp },
    /// Setup has not completed.
    SetupRequired { op: TransitionOp },
    /// Setup was refused because the host marked a live environment.
    LiveEnvironment,
    /// Neither a stock command nor a user command.
    UnknownCommand { name: String },
    /// A second command marker appeared on the line.
    MultipleCommandsInLine { extra: String },
    /// The line had no command marker at all.
    MissingCommand,
    /// A stock command needs an argument it did not receive.
    MissingArgument { command: &'static str },
    /// A registered user command matched but no delegate is attached.
    DelegateMissing { name: String },
    /// A color name was not recognized; `fallback` was applied instead.
    UnresolvedColor { token: String, fallback: ColorToken },
}

impl ConsoleError {
    /// Whether the report came with a substitute value and the action still ran.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ConsoleError::UnresolvedColor { .. })
    }
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::InvalidTransition { op, state } => match (op, state) {
                (TransitionOp::Open, _) => {
                    write!(f, "console is already displayed ({}), close it first", state)
                }
                (TransitionOp::Close, ConsoleState::Closed) => {
                    write!(f, "console must be open first")
                }
                (TransitionOp::ExitFullscreen, _) => {
                    write!(f, "console is not in fullscreen ({})", state)
                }
                _ => write!(f, "cannot {} while {}", op, state),
            },
            ConsoleError::UnsupportedForEmbedded { op } => write!(
                f,
                "cannot {} an embedded console, remove it from its container instead",
                op
            ),
            ConsoleError::SetupRequired { op } => {
                write!(f, "cannot {}: console setup has not completed", op)
            }
            ConsoleError::LiveEnvironment => {
                write!(f, "console is disabled in a live environment")
            }
            ConsoleError::UnknownCommand { name } => write!(f, "invalid command '{}'", name),
            ConsoleError::MultipleCommandsInLine { extra } => write!(
                f,
                "only one command may be used at a time (ignored '-{}' and the rest of the line)",
                extra
            ),
            ConsoleError::MissingCommand => {
                write!(f, "no command given, commands start with '-'")
            }
            ConsoleError::MissingArgument { command } => {
                write!(f, "'{}' needs an argument", command)
            }
            ConsoleError::DelegateMissing { name } => write!(
                f,
                "command delegate not set, cannot forward '{}'",
                name
            ),
            ConsoleError::UnresolvedColor { token, fallback } => write!(
                f,
                "invalid color '{}', using default {}",
                token, fallback
            ),
        }
    }
}

impl std::error::Error for ConsoleError {}
