//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Frame period of the game loop.
    pub frame_interval_ms: u64,
    /// Frames a direction stays held after its key event.
    ///
    /// Terminals report presses and auto-repeats but no releases, so a held
    /// key is modelled as a press that decays.
    pub input_hold_frames: u8,
    /// Log directory name; generated from the start time when unset.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            input_hold_frames: 6,
            session_id: None,
            log_dir: None,
            ui: UiConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Frame period in milliseconds (default: 16)
    /// - `CLI_INPUT_HOLD_FRAMES` - Frames a key press stays held (default: 6)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `GAME_SESSION_ID` - Session identifier for the log directory
    /// - `LOG_DIR` - Base log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.clamp(1, 1000);
        }

        if let Some(frames) = read_env::<u8>("CLI_INPUT_HOLD_FRAMES") {
            config.input_hold_frames = frames.max(1);
        }

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config.session_id = env::var("GAME_SESSION_ID").ok().filter(|s| !s.is_empty());
        config.log_dir = env::var_os("LOG_DIR").map(PathBuf::from);

        config
    }

    /// Frame period in seconds, used as the physics step.
    pub fn frame_seconds(&self) -> f32 {
        self.frame_interval_ms as f32 / 1000.0
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
