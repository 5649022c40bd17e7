//! Host log capture via [LogPlugin](bevy::log::LogPlugin).
//!
//! Install [`custom_log_layer`] so host log events show up in the console
//! output, the way a device console shows the app's log text:
//!
//! ```ignore
//! App::new().add_plugins(DefaultPlugins.set(LogPlugin {
//!     custom_layer: bevy_overlay_console::logging::custom_log_layer,
//!     ..default()
//! }));
//! ```

use bevy::log::{BoxedLayer, Level};
use bevy::prelude::*;
use std::sync::mpsc;
use tracing::Subscriber;
use tracing_subscriber::field::Visit;
use tracing_subscriber::Layer;

use crate::core::{
    ConsoleFacade, ConsoleOutputEvent, ConsoleOutputLevel, OverlayConsole, PrintTarget,
    CONSOLE_LOG_TARGET,
};

/// Layer factory for [`LogPlugin::custom_layer`](bevy::log::LogPlugin::custom_layer).
pub fn custom_log_layer(app: &mut App) -> Option<BoxedLayer> {
    Some(Box::new(create_capture_layer(app)))
}

fn create_capture_layer(app: &mut App) -> LogCaptureLayer {
    let (sender, receiver) = mpsc::channel();
    app.add_message::<LogMessage>();
    app.insert_non_send_resource(CapturedLogEvents(receiver));
    app.add_systems(PostUpdate, transfer_log_events);

    LogCaptureLayer { sender }
}

/// A captured host log event.
#[derive(Message, Debug, Clone)]
pub struct LogMessage {
    /// The message contents.
    pub message: String,
    /// Where the event was logged from.
    pub target: &'static str,
    pub level: Level,
}

impl LogMessage {
    /// The console line shown for this event, tagged with its target.
    pub fn to_output(&self) -> ConsoleOutputEvent {
        ConsoleOutputEvent::new(
            output_level(self.level),
            format!("[{}] {}", self.target, self.message),
        )
    }
}

/// Map a host log level onto the console's line levels.
pub fn output_level(level: Level) -> ConsoleOutputLevel {
    match level {
        Level::ERROR => ConsoleOutputLevel::Error,
        Level::WARN => ConsoleOutputLevel::Warn,
        Level::INFO => ConsoleOutputLevel::Info,
        Level::DEBUG | Level::TRACE => ConsoleOutputLevel::Debug,
    }
}

/// Moves events from the capture channel into [`MessageWriter<LogMessage>`](LogMessage).
fn transfer_log_events(
    receiver: NonSend<CapturedLogEvents>,
    mut log_events: MessageWriter<LogMessage>,
) {
    for msg in receiver.0.try_iter() {
        log_events.write(msg);
    }
}

/// Appends captured host log lines to the console output buffer.
pub fn append_captured_logs(
    mut log_events: MessageReader<LogMessage>,
    mut console: ResMut<OverlayConsole>,
) {
    for log in log_events.read() {
        console.print(PrintTarget::Console, log.to_output());
    }
}

struct CapturedLogEvents(mpsc::Receiver<LogMessage>);

struct LogCaptureLayer {
    sender: mpsc::Sender<LogMessage>,
}

impl<S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>> Layer<S>
    for LogCaptureLayer
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        // Console lines mirrored to the host are already in the buffer.
        if metadata.target() == CONSOLE_LOG_TARGET {
            return;
        }

        let mut message = None;
        event.record(&mut MessageVisitor(&mut message));
        if let Some(message) = message {
            let _ = self.sender.send(LogMessage {
                message,
                target: metadata.target(),
                level: *metadata.level(),
            });
        }
    }
}

/// Picks the `message` field out of an event.
struct MessageVisitor<'a>(&'a mut Option<String>);

impl Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}
