//! Game session mode and player-facing settings.
//!
//! The settings panel only forwards commands here: closing the panel,
//! toggling controller input and changing volume.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VOLUME;

/// Top-level mode of the running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Normal play; AI and player input are evaluated.
    #[default]
    Gameplay,
    /// The settings panel is open and gameplay is paused.
    Settings,
    /// The companion died. Terminal.
    GameOver,
}

/// Settings adjustable from the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Use gamepad input instead of mouse and keyboard.
    pub controller: bool,
    /// Master volume in `[0, 1]`.
    pub volume: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            controller: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// Session state owned by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSession {
    mode: GameMode,
    settings: GameSettings,
}

impl GameSession {
    /// Starts a session in gameplay mode with `settings`.
    #[must_use]
    pub fn new(mut settings: GameSettings) -> Self {
        settings.volume = sanitise_volume(settings.volume).unwrap_or(DEFAULT_VOLUME);
        Self {
            mode: GameMode::Gameplay,
            settings,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Whether gameplay systems should run.
    #[must_use]
    pub fn is_gameplay_active(&self) -> bool {
        self.mode == GameMode::Gameplay
    }

    /// Opens the settings panel. Ignored unless in gameplay.
    pub fn open_settings(&mut self) {
        if self.mode == GameMode::Gameplay {
            self.mode = GameMode::Settings;
            info!("settings opened");
        }
    }

    /// Closes the settings panel and resumes gameplay.
    pub fn close_settings(&mut self) {
        if self.mode == GameMode::Settings {
            self.mode = GameMode::Gameplay;
            info!("settings closed");
        }
    }

    /// Switches between controller and mouse input.
    pub fn set_controller(&mut self, enabled: bool) {
        self.settings.controller = enabled;
        info!("controller input {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Sets the master volume, clamped into `[0, 1]`.
    ///
    /// Non-finite values are rejected and leave the volume unchanged.
    pub fn set_volume(&mut self, volume: f32) {
        match sanitise_volume(volume) {
            Some(v) => {
                self.settings.volume = v;
                info!("volume set to {v:.2}");
            }
            None => warn!("ignoring non-finite volume {volume}"),
        }
    }

    /// Ends the session.
    pub fn game_over(&mut self) {
        if self.mode != GameMode::GameOver {
            self.mode = GameMode::GameOver;
            info!("game over");
        }
    }
}

fn sanitise_volume(volume: f32) -> Option<f32> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.4, 0.4)]
    #[case(3.0, 1.0)]
    #[case(-1.0, 0.0)]
    #[case(f32::NAN, DEFAULT_VOLUME)]
    fn new_session_sanitises_volume(#[case] volume: f32, #[case] expected: f32) {
        let session = GameSession::new(GameSettings {
            controller: true,
            volume,
        });
        assert!(session.is_gameplay_active());
        assert!(session.settings().controller);
        assert!((session.settings().volume - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn settings_pause_and_resume_gameplay() {
        let mut session = GameSession::default();
        assert!(session.is_gameplay_active());
        session.open_settings();
        assert_eq!(session.mode(), GameMode::Settings);
        assert!(!session.is_gameplay_active());
        session.close_settings();
        assert!(session.is_gameplay_active());
    }

    #[test]
    fn game_over_is_terminal() {
        let mut session = GameSession::default();
        session.game_over();
        session.open_settings();
        session.close_settings();
        assert_eq!(session.mode(), GameMode::GameOver);
    }

    #[rstest]
    #[case(0.4, 0.4)]
    #[case(1.7, 1.0)]
    #[case(-0.2, 0.0)]
    fn volume_is_clamped(#[case] requested: f32, #[case] expected: f32) {
        let mut session = GameSession::default();
        session.set_volume(requested);
        assert_eq!(session.settings().volume, expected);
    }

    #[test]
    fn nan_volume_is_ignored() {
        let mut session = GameSession::default();
        session.set_volume(0.3);
        session.set_volume(f32::NAN);
        assert_eq!(session.settings().volume, 0.3);
    }

    #[test]
    fn controller_toggle_is_recorded() {
        let mut session = GameSession::default();
        session.set_controller(true);
        assert!(session.settings().controller);
    }
}
