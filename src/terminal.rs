//! Terminal backend for headless hosts.
//!
//! Lines typed on stdin are submitted as [`ConsoleInputEvent`]s; console
//! output and lifecycle changes are written to stdout.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use bevy::prelude::*;

use crate::core::{ConsoleInputEvent, ConsoleLifecycleEvent, ConsoleOutputEvent, ConsoleOutputLevel};

/// Plugin that adds terminal (stdin/stdout) console support.
pub struct TerminalPlugin;

impl Plugin for TerminalPlugin {
    fn build(&self, app: &mut App) {
        let (sender, receiver) = mpsc::channel();
        let _handle = spawn_stdin_reader(sender);

        app.insert_resource(StdinReceiver(Mutex::new(receiver)))
            .init_resource::<TerminalConfig>()
            .add_systems(Update, (read_stdin, write_stdout, write_lifecycle));
    }
}

/// Configuration for terminal behavior.
#[derive(Resource, Debug, Clone)]
pub struct TerminalConfig {
    /// Color lines by level with ANSI escape codes.
    pub colored: bool,
    /// Print the echo of submitted lines. The terminal already shows them.
    pub echo_commands: bool,
    /// Print lifecycle changes such as "console opened".
    pub show_lifecycle: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            colored: false,
            echo_commands: false,
            show_lifecycle: true,
        }
    }
}

#[derive(Resource)]
struct StdinReceiver(Mutex<Receiver<String>>);

fn spawn_stdin_reader(sender: Sender<String>) -> JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines().map_while(Result::ok) {
            // Inner spaces are significant to the tokenizer; only the line ending goes.
            let text = line.trim_end().to_string();
            if !text.trim().is_empty() && sender.send(text).is_err() {
                break;
            }
        }
    })
}

fn read_stdin(receiver: Res<StdinReceiver>, mut events: MessageWriter<ConsoleInputEvent>) {
    let Ok(rx) = receiver.0.lock() else {
        return;
    };
    while let Ok(line) = rx.try_recv() {
        events.write(ConsoleInputEvent::new(line));
    }
}

fn write_stdout(mut events: MessageReader<ConsoleOutputEvent>, config: Res<TerminalConfig>) {
    let mut out = io::stdout().lock();
    for event in events.read() {
        if event.level == ConsoleOutputLevel::Command && !config.echo_commands {
            continue;
        }
        let _ = writeln!(out, "{}", format_line(&event.message, event.level, config.colored));
    }
    let _ = out.flush();
}

fn write_lifecycle(mut events: MessageReader<ConsoleLifecycleEvent>, config: Res<TerminalConfig>) {
    if !config.show_lifecycle {
        events.clear();
        return;
    }
    for event in events.read() {
        println!("[console] {}", describe_lifecycle(event));
    }
}

fn describe_lifecycle(event: &ConsoleLifecycleEvent) -> String {
    match event {
        ConsoleLifecycleEvent::Ready => "ready".to_string(),
        ConsoleLifecycleEvent::Opened => "opened".to_string(),
        ConsoleLifecycleEvent::Closed => "closed".to_string(),
        ConsoleLifecycleEvent::FullscreenEntered => "fullscreen".to_string(),
        ConsoleLifecycleEvent::FullscreenExited { orientation } => {
            format!("docked {}", orientation)
        }
        ConsoleLifecycleEvent::Reset => "reset".to_string(),
        ConsoleLifecycleEvent::Removed => "removed".to_string(),
    }
}

fn format_line(message: &str, level: ConsoleOutputLevel, colored: bool) -> String {
    if !colored {
        return message.to_string();
    }
    let color = match level {
        ConsoleOutputLevel::Debug => "\x1b[90m",
        ConsoleOutputLevel::Info => "\x1b[0m",
        ConsoleOutputLevel::Warn => "\x1b[33m",
        ConsoleOutputLevel::Error => "\x1b[31m",
        ConsoleOutputLevel::Command => "\x1b[36m",
        ConsoleOutputLevel::Result => "\x1b[32m",
    };
    format!("{}{}\x1b[0m", color, message)
}
