//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::DirectionalInput;

use crate::state::AppMode;

/// Longest nickname the ending screen accepts.
pub const MAX_NAME_LEN: usize = 24;

/// Direction a key drives the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    Move(Direction),
    /// Append a character to the nickname.
    Type(char),
    Erase,
    /// Submit the nickname, or re-arm a failed attempt.
    Confirm,
    ToggleScoreboard,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current mode.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return KeyAction::Quit;
        }
        if key.code == KeyCode::Tab {
            return KeyAction::ToggleScoreboard;
        }

        match mode {
            AppMode::Playing => self.playing(key),
            AppMode::Ending => self.ending(key),
        }
    }

    fn playing(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'h' | 'a' => KeyAction::Move(Direction::Left),
                'l' | 'd' => KeyAction::Move(Direction::Right),
                'k' | 'w' | ' ' => KeyAction::Move(Direction::Up),
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn ending(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Backspace => KeyAction::Erase,
            KeyCode::Char(ch) if !ch.is_control() => KeyAction::Type(ch),
            _ => KeyAction::None,
        }
    }
}

/// Keys held during recent frames.
///
/// Each press holds its direction for a fixed number of frames; terminal
/// auto-repeat refreshes the hold while the key stays down.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    hold_frames: u8,
    left: u8,
    right: u8,
    up: u8,
}

impl HeldKeys {
    pub fn new(hold_frames: u8) -> Self {
        Self {
            hold_frames: hold_frames.max(1),
            left: 0,
            right: 0,
            up: 0,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.left = self.hold_frames;
                self.right = 0;
            }
            Direction::Right => {
                self.right = self.hold_frames;
                self.left = 0;
            }
            Direction::Up => self.up = self.hold_frames,
        }
    }

    pub fn release_all(&mut self) {
        self.left = 0;
        self.right = 0;
        self.up = 0;
    }

    /// Input for this frame; ages every hold by one frame.
    pub fn frame(&mut self) -> DirectionalInput {
        let input = DirectionalInput {
            left: self.left > 0,
            right: self.right > 0,
            up: self.up > 0,
        };
        self.left = self.left.saturating_sub(1);
        self.right = self.right.saturating_sub(1);
        self.up = self.up.saturating_sub(1);
        input
    }
}
