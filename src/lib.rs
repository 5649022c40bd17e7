//! An in-app overlay debug console for Bevy.
//!
//! The console panel is driven by two plain Rust components:
//!
//! - **ConsoleStateMachine**: closed / open / fullscreen / embedded lifecycle,
//!   docked to one of four screen edges
//! - **CommandDispatcher**: turns a `-command arg...` line into a stock action,
//!   a forwarded user command, or a reported error
//!
//! [`OverlayConsolePlugin`] wires both into an `App` through messages. Drawing
//! the panel is left to the host.
//!
//! # Features
//!
//! - `capture` (default): show host log events in the console output
//! - `terminal`: stdin/stdout backend for headless hosts
//! - `persist`: RON settings file loaded at startup
//! - `full`: Enable capture + persist
//!
//! # Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_overlay_console::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(
//!             OverlayConsolePlugin::default()
//!                 .setup(ConsoleKind::TextPopover, Orientation::Bottom),
//!         )
//!         .add_systems(Startup, register_commands)
//!         .add_systems(Update, on_user_command)
//!         .run();
//! }
//!
//! fn register_commands(mut dispatcher: ResMut<CommandDispatcher>) {
//!     dispatcher.register_user_command("spawn");
//! }
//!
//! fn on_user_command(mut events: MessageReader<UserCommandEvent>) {
//!     for event in events.read() {
//!         info!("{} {:?}", event.name, event.arguments);
//!     }
//! }
//! ```

use bevy::prelude::*;

// Core module (always available, zero optional deps)
pub mod core;

pub use core::{
    resolve_color, resolve_color_strict, tokenize, ColorToken, CommandDelegate, CommandDispatcher,
    ConsoleClearEvent, ConsoleError, ConsoleEventsPlugin, ConsoleFacade, ConsoleInputEvent,
    ConsoleKind, ConsoleLifecycleEvent, ConsoleOutputEvent, ConsoleOutputLevel, ConsoleSettings,
    ConsoleState, ConsoleStateMachine, DispatchReport, Dispatched, Orientation, OverlayConsole,
    ParsedCommand, PrintTarget, SendEmailEvent, StockCommand, TransitionRecord, UserCommandEvent,
};

// Host log capture (feature-gated)
#[cfg(feature = "capture")]
pub mod logging;

// Terminal backend (feature-gated)
#[cfg(feature = "terminal")]
pub mod terminal;

// Persistence module (feature-gated)
#[cfg(feature = "persist")]
pub mod persist;

#[cfg(feature = "persist")]
pub use persist::{ConfigError, ConfigPath, ConsoleConfigFile};

#[cfg(feature = "terminal")]
pub use terminal::{TerminalConfig, TerminalPlugin};

/// Prefix for the echo of a submitted line.
pub const COMMAND_ECHO_PREFIX: &str = "$ ";

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ColorToken, CommandDelegate, CommandDispatcher, ConsoleFacade, ConsoleInputEvent,
        ConsoleKind, ConsoleLifecycleEvent, ConsoleOutputEvent, ConsoleOutputLevel,
        ConsoleSettings, ConsoleState, Orientation, OverlayConsole, SendEmailEvent,
        UserCommandEvent,
    };
    pub use crate::{MessageDelegate, OverlayConsolePlugin};
}

/// Main console plugin.
///
/// # Configuration
///
/// ```ignore
/// OverlayConsolePlugin::default()
///     .settings(ConsoleSettings { move_enabled: true, ..default() })
///     .setup(ConsoleKind::Popover, Orientation::Top)
///     .mail_available(true)
/// ```
#[derive(Default, Clone)]
pub struct OverlayConsolePlugin {
    settings: Option<ConsoleSettings>,
    setup: Option<StartupSetup>,
    mail_available: bool,
}

impl OverlayConsolePlugin {
    /// Initial appearance and layout overrides.
    pub fn settings(mut self, settings: ConsoleSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Set the console up during `Startup`.
    pub fn setup(mut self, kind: ConsoleKind, orientation: Orientation) -> Self {
        self.setup = Some(StartupSetup { kind, orientation });
        self
    }

    /// Whether the host answers [`SendEmailEvent`]s. Enables `-sendemail`.
    pub fn mail_available(mut self, available: bool) -> Self {
        self.mail_available = available;
        self
    }
}

impl Plugin for OverlayConsolePlugin {
    fn build(&self, app: &mut App) {
        let mut console = OverlayConsole::with_settings(self.settings.clone().unwrap_or_default());
        console.set_mail_available(self.mail_available);

        app.insert_resource(console)
            .init_resource::<CommandDispatcher>()
            .init_resource::<MessageDelegate>()
            .add_plugins(core::ConsoleEventsPlugin);

        if let Some(setup) = self.setup {
            app.insert_resource(setup);
        }
        app.add_systems(Startup, setup_on_startup);

        // 1. process_console_input: tokenize and dispatch submitted lines
        // 2. send_console_messages: drain the console's queues into messages
        app.add_systems(
            Update,
            (process_console_input, send_console_messages).chain(),
        );

        #[cfg(feature = "capture")]
        {
            app.add_message::<logging::LogMessage>().add_systems(
                Update,
                logging::append_captured_logs.before(process_console_input),
            );
        }

        #[cfg(feature = "persist")]
        {
            app.init_resource::<persist::ConfigPath>().add_systems(
                Startup,
                persist::load_config_on_startup.before(setup_on_startup),
            );
        }

        #[cfg(feature = "terminal")]
        {
            app.add_plugins(terminal::TerminalPlugin);
        }
    }
}

/// Setup requested through [`OverlayConsolePlugin::setup`].
#[derive(Resource, Debug, Clone, Copy)]
struct StartupSetup {
    kind: ConsoleKind,
    orientation: Orientation,
}

fn setup_on_startup(setup: Option<Res<StartupSetup>>, mut console: ResMut<OverlayConsole>) {
    let Some(setup) = setup else {
        return;
    };
    match console.setup(setup.kind, setup.orientation) {
        Ok(record) => info!("Console ready, docked {}", record.orientation),
        Err(e) => warn!("Console setup refused: {}", e),
    }
}

/// The plugin's [`CommandDelegate`].
///
/// Forwarded user commands are sent as [`UserCommandEvent`]s. Names listed here
/// are handled in addition to those registered on the [`CommandDispatcher`].
/// Detach it to have registered names reported as a missing delegate.
#[derive(Resource, Debug, Clone)]
pub struct MessageDelegate {
    attached: bool,
    commands: Vec<String>,
    forwarded: Vec<UserCommandEvent>,
}

impl Default for MessageDelegate {
    fn default() -> Self {
        Self {
            attached: true,
            commands: Vec::new(),
            forwarded: Vec::new(),
        }
    }
}

impl MessageDelegate {
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Add a name to the delegate's own command list.
    pub fn add_command(&mut self, name: impl Into<String>) {
        let name = name.into().to_lowercase();
        if !self.commands.contains(&name) {
            self.commands.push(name);
        }
    }

    fn take_forwarded(&mut self) -> Vec<UserCommandEvent> {
        std::mem::take(&mut self.forwarded)
    }
}

impl CommandDelegate for MessageDelegate {
    fn command_list(&self) -> Vec<String> {
        self.commands.clone()
    }

    fn did_get_command(&mut self, name: &str, arguments: &[String]) {
        self.forwarded
            .push(UserCommandEvent::new(name, arguments.to_vec()));
    }
}

/// System that echoes and dispatches submitted lines.
fn process_console_input(
    mut input_events: MessageReader<ConsoleInputEvent>,
    dispatcher: Res<CommandDispatcher>,
    mut console: ResMut<OverlayConsole>,
    mut delegate: ResMut<MessageDelegate>,
) {
    for event in input_events.read() {
        if event.line.trim().is_empty() {
            continue;
        }

        console.print(
            PrintTarget::Console,
            ConsoleOutputEvent::command(format!("{}{}", COMMAND_ECHO_PREFIX, event.line)),
        );

        let target: Option<&mut dyn CommandDelegate> = if delegate.is_attached() {
            Some(&mut *delegate)
        } else {
            None
        };
        let report = dispatcher.process(&event.line, &mut *console, target);
        if !report.is_clean() {
            debug!("'{}' reported {} error(s)", event.line, report.errors.len());
        }
    }
}

/// System that sends everything the console queued this frame.
fn send_console_messages(
    mut console: ResMut<OverlayConsole>,
    mut delegate: ResMut<MessageDelegate>,
    mut output_events: MessageWriter<ConsoleOutputEvent>,
    mut lifecycle_events: MessageWriter<ConsoleLifecycleEvent>,
    mut user_events: MessageWriter<UserCommandEvent>,
    mut mail_events: MessageWriter<SendEmailEvent>,
    mut clear_events: MessageWriter<ConsoleClearEvent>,
) {
    if console.take_clear_request() {
        clear_events.write(ConsoleClearEvent);
    }
    for output in console.take_outputs() {
        output_events.write(output);
    }
    for lifecycle in console.take_lifecycle() {
        lifecycle_events.write(lifecycle);
    }
    for mail in console.take_mail() {
        mail_events.write(mail);
    }
    for forwarded in delegate.take_forwarded() {
        user_events.write(forwarded);
    }
}
