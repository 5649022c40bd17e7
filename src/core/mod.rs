//! Core console types with zero optional dependencies.
//!
//! This module provides the fundamental building blocks:
//! - [`ConsoleStateMachine`] - Lifecycle of the console panel
//! - [`CommandDispatcher`] - Resolves dash-prefixed command lines
//! - [`OverlayConsole`] - The console resource the dispatcher acts on
//! - [`tokenize`] - Dash-command tokenizer
//! - [`resolve_color`] - Color token lookup with a green fallback
//! - Events for communication between layers

mod color;
mod console;
mod dispatcher;
mod error;
mod events;
mod facade;
mod settings;
mod state;
mod tokenizer;

pub use color::{resolve_color, resolve_color_strict, ColorToken, ResolvedColor, FALLBACK_COLOR};
pub use console::{OverlayConsole, CONSOLE_LOG_TARGET, DEFAULT_MAX_LINES};
pub use dispatcher::{CommandDispatcher, DispatchReport, Dispatched, StockCommand};
pub use error::ConsoleError;
pub use events::{
    ConsoleClearEvent, ConsoleEventsPlugin, ConsoleInputEvent, ConsoleLifecycleEvent,
    ConsoleOutputEvent, ConsoleOutputLevel, SendEmailEvent, UserCommandEvent,
};
pub use facade::{CommandDelegate, ConsoleFacade, PrintTarget};
pub use settings::ConsoleSettings;
pub use state::{
    ConsoleKind, ConsoleState, ConsoleStateMachine, Orientation, TransitionOp, TransitionRecord,
};
pub use tokenizer::{tokenize, ParsedCommand, ParsedLine, TokenizeError, COMMAND_MARKER};
