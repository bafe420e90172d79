//! Keyboard input — samples macroquad key state and translates it
//! into player commands.
//!
//! Sampling and translation are split so the translation logic is a
//! pure function over plain flags, testable without a window.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

use sidescroll_core::commands::PlayerCommand;
use sidescroll_core::enums::GamePhase;

/// Key state captured once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Held keys: movement repeats every frame.
    pub left_held: bool,
    pub right_held: bool,
    /// Pressed keys: one command per key press.
    pub jump_pressed: bool,
    pub start_pressed: bool,
    pub restart_pressed: bool,
    pub pause_pressed: bool,
}

/// Read the current key state from macroquad.
pub fn sample() -> InputFrame {
    InputFrame {
        left_held: is_key_down(KeyCode::Left),
        right_held: is_key_down(KeyCode::Right),
        jump_pressed: is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Up),
        start_pressed: is_key_pressed(KeyCode::Enter),
        restart_pressed: is_key_pressed(KeyCode::R),
        pause_pressed: is_key_pressed(KeyCode::P),
    }
}

/// Translate one frame of input into commands for the engine,
/// given the phase from the most recent snapshot.
pub fn commands(frame: &InputFrame, phase: GamePhase) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();

    if frame.start_pressed && matches!(phase, GamePhase::Ready | GamePhase::GameOver) {
        commands.push(PlayerCommand::StartGame);
    }

    if frame.restart_pressed && phase != GamePhase::Ready {
        commands.push(PlayerCommand::Restart);
    }

    if frame.pause_pressed {
        match phase {
            GamePhase::Active => commands.push(PlayerCommand::Pause),
            GamePhase::Paused => commands.push(PlayerCommand::Resume),
            _ => {}
        }
    }

    if phase == GamePhase::Active {
        if frame.left_held {
            commands.push(PlayerCommand::MoveLeft);
        }
        if frame.right_held {
            commands.push(PlayerCommand::MoveRight);
        }
        if frame.jump_pressed {
            commands.push(PlayerCommand::Jump);
        }
    }

    commands
}
