//! Minimal headless console example.
//!
//! Drives the overlay console programmatically without drawing it.
//! Useful for testing or for wiring up a custom panel.
//!
//! Run with: `cargo run --example minimal`

use bevy::prelude::*;
use bevy_overlay_console::prelude::*;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(
            OverlayConsolePlugin::default().setup(ConsoleKind::TextPopover, Orientation::Bottom),
        )
        .add_systems(Startup, register_commands)
        .add_systems(Update, (process_outputs, on_user_command, on_lifecycle))
        .add_systems(Update, send_test_commands.run_if(run_once))
        .run();
}

fn register_commands(mut dispatcher: ResMut<CommandDispatcher>) {
    dispatcher.register_user_command("greet");
    println!("Console initialized. User commands: greet");
}

/// Open the console and send some lines programmatically.
fn send_test_commands(
    mut console: ResMut<OverlayConsole>,
    mut events: MessageWriter<ConsoleInputEvent>,
) {
    println!("\n--- Sending test commands ---");

    if let Err(e) = console.open() {
        println!("open failed: {}", e);
    }

    // Stock commands
    events.write(ConsoleInputEvent::new("-textcolor red"));
    events.write(ConsoleInputEvent::new("-backgroundcolor chartreuse"));
    events.write(ConsoleInputEvent::new("-enterfullscreen"));
    events.write(ConsoleInputEvent::new("-exitfullscreen"));

    // A user command, forwarded as a message
    events.write(ConsoleInputEvent::new("-greet Developer"));

    // Errors
    events.write(ConsoleInputEvent::new("-textcolor -background blue"));
    events.write(ConsoleInputEvent::new("-mystery"));
}

fn on_user_command(mut events: MessageReader<UserCommandEvent>) {
    for event in events.read() {
        if event.name == "greet" {
            let name = event.arguments.first().map(String::as_str).unwrap_or("world");
            println!("Hello, {}!", name);
        }
    }
}

fn on_lifecycle(mut events: MessageReader<ConsoleLifecycleEvent>) {
    for event in events.read() {
        println!("[lifecycle] {:?}", event);
    }
}

/// Print console output lines.
fn process_outputs(mut events: MessageReader<ConsoleOutputEvent>) {
    for event in events.read() {
        let prefix = match event.level {
            ConsoleOutputLevel::Debug => "[DEBUG]",
            ConsoleOutputLevel::Info => "[INFO]",
            ConsoleOutputLevel::Warn => "[WARN]",
            ConsoleOutputLevel::Error => "[ERROR]",
            ConsoleOutputLevel::Command => "[$]",
            ConsoleOutputLevel::Result => "[>]",
        };
        println!("{} {}", prefix, event.message);
    }
}
