//! Collaborators the dispatcher calls into.
//!
//! [`ConsoleFacade`] is the console itself, as seen by stock commands.
//! [`CommandDelegate`] is the host application, which owns the user commands.

use bevy::color::Color;

use super::{ConsoleError, ConsoleOutputEvent, Orientation, TransitionRecord};

/// Where a printed line goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintTarget {
    /// The console output only.
    #[default]
    Console,
    /// The console output and the host log.
    Both,
    /// The host log only.
    HostOnly,
}

/// Console operations reachable from stock commands.
pub trait ConsoleFacade {
    fn set_background_color(&mut self, color: Color);
    fn set_text_color(&mut self, color: Color);
    fn set_text_field_color(&mut self, color: Color);
    fn set_diag_background_color(&mut self, color: Color);
    fn set_diag_text_color(&mut self, color: Color);
    fn enable_diag_mode(&mut self);
    fn disable_diag_mode(&mut self);

    fn enter_fullscreen(&mut self) -> Result<TransitionRecord, ConsoleError>;
    fn exit_fullscreen(&mut self, to: Option<Orientation>) -> Result<TransitionRecord, ConsoleError>;
    fn close(&mut self) -> Result<TransitionRecord, ConsoleError>;
    /// Full reset: state, orientation and every appearance override.
    fn reset(&mut self) -> TransitionRecord;

    /// Whether a mail composer is attached. Gates the `sendemail` command.
    fn can_send_email(&self) -> bool;
    fn send_email(&mut self, recipients: Vec<String>);

    fn print(&mut self, target: PrintTarget, output: ConsoleOutputEvent);
}

/// The host application's command vocabulary.
///
/// # Examples
///
/// ```
/// use bevy_overlay_console::core::CommandDelegate;
///
/// #[derive(Default)]
/// struct Game {
///     spawned: Vec<String>,
/// }
///
/// impl CommandDelegate for Game {
///     fn command_list(&self) -> Vec<String> {
///         vec!["spawn".into()]
///     }
///
///     fn did_get_command(&mut self, name: &str, arguments: &[String]) {
///         if name == "spawn" {
///             self.spawned.extend(arguments.iter().cloned());
///         }
///     }
/// }
/// ```
pub trait CommandDelegate {
    /// Names this delegate handles, without the marker. May change between calls.
    fn command_list(&self) -> Vec<String>;

    /// Called with the lower-cased name and the arguments, verbatim.
    fn did_get_command(&mut self, name: &str, arguments: &[String]);
}
