//! Console messages for communication between layers.
//!
//! - Input field -> Core: command lines
//! - Core -> Presentation: output lines, lifecycle changes, clear requests
//! - Core -> Host: forwarded user commands, mail requests

use bevy::prelude::*;

use super::{Orientation, TransitionOp, TransitionRecord};

/// Message sent when a line is submitted from the input field.
///
/// # Examples
///
/// ```ignore
/// fn submit(mut events: MessageWriter<ConsoleInputEvent>) {
///     events.write(ConsoleInputEvent::new("-backgroundcolor blue"));
/// }
/// ```
#[derive(Message, Debug, Clone)]
pub struct ConsoleInputEvent {
    /// The raw line.
    pub line: String,
}

impl ConsoleInputEvent {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// A line written to the console output.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct ConsoleOutputEvent {
    /// The message text.
    pub message: String,
    /// The log level/type.
    pub level: ConsoleOutputLevel,
}

/// Log level for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleOutputLevel {
    /// Diagnostic traces.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Drawn in the warning color.
    Warn,
    /// Drawn in the error color.
    Error,
    /// Echo of a submitted line.
    Command,
    /// Confirmation of a stock command.
    Result,
}

impl ConsoleOutputEvent {
    pub fn new(level: ConsoleOutputLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Debug, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Error, message)
    }

    pub fn command(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Command, message)
    }

    pub fn result(message: impl Into<String>) -> Self {
        Self::new(ConsoleOutputLevel::Result, message)
    }
}

/// Sent after each successful state-machine transition.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLifecycleEvent {
    /// Setup completed.
    Ready,
    Opened,
    Closed,
    FullscreenEntered,
    FullscreenExited { orientation: Orientation },
    /// Console and settings were reset; setup is needed again.
    Reset,
    /// Console was detached from its host.
    Removed,
}

impl From<TransitionRecord> for ConsoleLifecycleEvent {
    fn from(record: TransitionRecord) -> Self {
        match record.op {
            TransitionOp::Setup => ConsoleLifecycleEvent::Ready,
            TransitionOp::Open => ConsoleLifecycleEvent::Opened,
            TransitionOp::Close => ConsoleLifecycleEvent::Closed,
            TransitionOp::EnterFullscreen => ConsoleLifecycleEvent::FullscreenEntered,
            TransitionOp::ExitFullscreen => ConsoleLifecycleEvent::FullscreenExited {
                orientation: record.orientation,
            },
            TransitionOp::Reset => ConsoleLifecycleEvent::Reset,
            TransitionOp::Remove => ConsoleLifecycleEvent::Removed,
        }
    }
}

/// A user command forwarded by the default delegate.
///
/// # Examples
///
/// ```ignore
/// fn on_user_command(mut events: MessageReader<UserCommandEvent>) {
///     for event in events.read() {
///         if event.name == "spawn" {
///             info!("spawning {:?}", event.arguments);
///         }
///     }
/// }
/// ```
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct UserCommandEvent {
    pub name: String,
    pub arguments: Vec<String>,
}

impl UserCommandEvent {
    pub fn new(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Request for the host's mail composer.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct SendEmailEvent {
    pub recipients: Vec<String>,
    /// The console log at the time of the request.
    pub body: String,
}

/// Message requesting the console to clear its output buffer.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ConsoleClearEvent;

/// Plugin that registers all console messages.
pub struct ConsoleEventsPlugin;

impl Plugin for ConsoleEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ConsoleInputEvent>()
            .add_message::<ConsoleOutputEvent>()
            .add_message::<ConsoleLifecycleEvent>()
            .add_message::<UserCommandEvent>()
            .add_message::<SendEmailEvent>()
            .add_message::<ConsoleClearEvent>();
    }
}
