//! Persistence layer for console configuration.
//!
//! Provides RON-based save/load for [`ConsoleSettings`] and the user command
//! names registered on the [`CommandDispatcher`].

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{CommandDispatcher, ConsoleSettings, OverlayConsole};

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "overlay_console.ron";

/// Serializable console configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConsoleConfigFile {
    /// Appearance and layout overrides.
    #[serde(default)]
    pub settings: ConsoleSettings,
    /// User command names registered at startup.
    #[serde(default)]
    pub user_commands: Vec<String>,
}

impl ConsoleConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;

        ron::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))
    }

    /// Save config to a RON file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::Io(parent.display().to_string(), e.to_string()))?;
            }
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let contents = ron::ser::to_string_pretty(self, pretty)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))
    }

    /// Load config from file, returning default if the file is missing or broken.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Snapshot the live console and dispatcher.
    pub fn capture(console: &OverlayConsole, dispatcher: &CommandDispatcher) -> Self {
        Self {
            settings: console.settings().clone(),
            user_commands: dispatcher.user_commands().map(str::to_string).collect(),
        }
    }

    /// Apply to the live console and dispatcher. Settings are replaced, user
    /// commands are added to those already registered.
    pub fn apply(&self, console: &mut OverlayConsole, dispatcher: &mut CommandDispatcher) {
        *console.settings_mut() = self.settings.clone();
        for name in &self.user_commands {
            dispatcher.register_user_command(name.as_str());
        }
    }
}

/// Errors that can occur during config operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error (path, message).
    Io(String, String),
    /// Parse error (path, message).
    Parse(String, String),
    /// Serialization error.
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, msg) => write!(f, "IO error for '{}': {}", path, msg),
            ConfigError::Parse(path, msg) => write!(f, "Parse error for '{}': {}", path, msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resource tracking the config file path.
#[derive(Resource, Debug, Clone)]
pub struct ConfigPath(pub String);

impl Default for ConfigPath {
    fn default() -> Self {
        Self(DEFAULT_CONFIG_FILE.to_string())
    }
}

/// Save the live configuration to `path`.
pub fn save_config(
    console: &OverlayConsole,
    dispatcher: &CommandDispatcher,
    path: impl AsRef<Path>,
) -> Result<(), ConfigError> {
    ConsoleConfigFile::capture(console, dispatcher).save(path)
}

/// Startup system that applies the config file when present.
pub fn load_config_on_startup(
    config_path: Res<ConfigPath>,
    mut console: ResMut<OverlayConsole>,
    mut dispatcher: ResMut<CommandDispatcher>,
) {
    let path = Path::new(&config_path.0);
    if !path.exists() {
        return;
    }

    match ConsoleConfigFile::load(path) {
        Ok(config) => {
            config.apply(&mut console, &mut dispatcher);
            info!("Loaded console config from '{}'", config_path.0);
        }
        Err(e) => warn!("Failed to load console config: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorToken;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_file_roundtrip() {
        let mut config = ConsoleConfigFile::new();
        config.settings.text_color = ColorToken::Orange.color();
        config.settings.diagnostic_mode = true;
        config.settings.width = Some(320.0);
        config.user_commands.push("spawn".to_string());

        let temp = NamedTempFile::new().unwrap();
        config.save(temp.path()).unwrap();

        let loaded = ConsoleConfigFile::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("console.ron");

        ConsoleConfigFile::new().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_config_file_load_missing() {
        let result = ConsoleConfigFile::load("nonexistent_file.ron");
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_config_file_load_or_default() {
        let config = ConsoleConfigFile::load_or_default("nonexistent_file.ron");
        assert_eq!(config, ConsoleConfigFile::default());
    }

    #[test]
    fn test_config_parse_partial_ron() {
        let ron_content = r#"(
    settings: (
        diagnostic_mode: true,
        move_enabled: true,
    ),
    user_commands: ["spawn", "teleport"],
)"#;

        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(ron_content.as_bytes()).unwrap();
        temp.flush().unwrap();

        let config = ConsoleConfigFile::load(temp.path()).unwrap();
        assert!(config.settings.diagnostic_mode);
        assert!(config.settings.move_enabled);
        assert_eq!(config.settings.text_color, ColorToken::Green.color());
        assert_eq!(config.user_commands, vec!["spawn", "teleport"]);
    }

    #[test]
    fn test_config_parse_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"(settings: [").unwrap();
        temp.flush().unwrap();

        assert!(matches!(
            ConsoleConfigFile::load(temp.path()),
            Err(ConfigError::Parse(..))
        ));
    }

    #[test]
    fn test_capture_and_apply() {
        let mut console = OverlayConsole::new();
        console.settings_mut().background_color = ColorToken::Blue.color();
        let mut dispatcher = CommandDispatcher::new();
        dispatcher.register_user_command("spawn");

        let config = ConsoleConfigFile::capture(&console, &dispatcher);

        let mut fresh_console = OverlayConsole::new();
        let mut fresh_dispatcher = CommandDispatcher::new();
        config.apply(&mut fresh_console, &mut fresh_dispatcher);

        assert_eq!(fresh_console.settings(), console.settings());
        assert!(fresh_dispatcher.is_registered("spawn"));
    }

    #[test]
    fn test_load_on_startup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("overlay_console.ron");
        let mut config = ConsoleConfigFile::new();
        config.settings.live_environment = true;
        config.save(&path).unwrap();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(ConfigPath(path.display().to_string()));
        app.add_plugins(
            crate::OverlayConsolePlugin::default()
                .setup(crate::core::ConsoleKind::Popover, crate::core::Orientation::Top),
        );
        app.update();

        let console = app.world().resource::<OverlayConsole>();
        assert!(console.settings().live_environment);
        assert!(!console.is_ready());
    }
}
