//! Application state shared across all screens.

use std::path::PathBuf;

use fz_core::SessionConfig;

use crate::theme::backgrounds::Backgrounds;
use crate::theme::font::UiFont;

/// Client settings collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiConfig {
    /// Directory holding `<room>.png|jpg|jpeg` backgrounds and an optional `font.ttf`.
    pub assets: PathBuf,
    /// Font file tried before any other.
    pub font: Option<PathBuf>,
    /// Frames an ordinary message stays up.
    pub message_ticks: u32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            font: None,
            message_ticks: SessionConfig::default().message_ticks,
        }
    }
}

impl GuiConfig {
    /// Session settings for a new playthrough.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default().with_message_ticks(self.message_ticks)
    }
}

/// Shared application state accessible by all screens.
pub struct AppState {
    /// Client settings.
    pub config: GuiConfig,
    /// The UI font.
    pub font: UiFont,
    /// Uploaded room backgrounds.
    pub backgrounds: Backgrounds,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create the app state from already loaded resources.
    pub fn new(config: GuiConfig, font: UiFont, backgrounds: Backgrounds) -> Self {
        Self {
            config,
            font,
            backgrounds,
            should_quit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_carries_message_ticks() {
        let config = GuiConfig {
            message_ticks: 45,
            ..GuiConfig::default()
        };
        let session = config.session_config();
        assert_eq!(session.message_ticks, 45);
        assert_eq!(session.win_message_ticks, 300);
        assert_eq!(session.capacity, 8);
    }
}
