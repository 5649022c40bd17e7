//! Terminal console example.
//!
//! Drives the overlay console from stdin/stdout for headless hosts.
//!
//! Run with: `cargo run --example terminal --features terminal`
//!
//! Try:
//! - `-textcolor red` - Change the text color
//! - `-enterfullscreen` / `-exitfullscreen` - Toggle fullscreen
//! - `-status` - A user command handled by this example
//! - `-closeconsole` - Close the console
//! - `-consolereset` - Reset everything

use bevy::prelude::*;
use bevy_overlay_console::prelude::*;

fn main() {
    println!("=== Overlay Console Terminal ===");
    println!("Type commands starting with '-' and press Enter.");
    println!();

    use std::io::Write;
    let _ = std::io::stdout().flush();

    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(
            OverlayConsolePlugin::default().setup(ConsoleKind::TextPopover, Orientation::Top),
        )
        .add_systems(Startup, register_commands)
        .add_systems(PostStartup, open_console)
        .add_systems(Update, on_user_command)
        .run();
}

fn register_commands(mut dispatcher: ResMut<CommandDispatcher>) {
    dispatcher.register_user_command("status");
    dispatcher.register_user_command("say");
}

fn open_console(mut console: ResMut<OverlayConsole>) {
    if let Err(e) = console.open() {
        println!("Cannot open console: {}", e);
    }
}

fn on_user_command(mut events: MessageReader<UserCommandEvent>, console: Res<OverlayConsole>) {
    for event in events.read() {
        match event.name.as_str() {
            "status" => {
                println!("=== Status ===");
                println!("State: {}", console.state());
                println!("Orientation: {}", console.orientation());
                println!("Diagnostic mode: {}", console.settings().diagnostic_mode);
            }
            "say" if event.arguments.is_empty() => println!("Usage: -say <message>"),
            "say" => println!("[HOST] {}", event.arguments.join(" ")),
            _ => {}
        }
    }
}
