//! Input handling (keyboard and directional input).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Runs one frame: drains pending input, advances the scene, redraws.
    ///
    /// Returns `true` when the player asked to quit.
    pub(in crate::event) async fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key).await {
                        self.render(terminal)?;
                        return Ok(true);
                    }
                }
                _ => {}
            }
        }

        self.advance_scene().await;
        self.render(terminal)?;
        Ok(false)
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) async fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key, &self.app_state.mode) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                return true;
            }
            KeyAction::Move(direction) => self.held.press(direction),
            KeyAction::Type(ch) => {
                if self.accepts_name() {
                    self.app_state.type_char(ch);
                }
            }
            KeyAction::Erase => {
                if self.accepts_name() {
                    self.app_state.erase_char();
                }
            }
            KeyAction::Confirm => self.confirm().await,
            KeyAction::ToggleScoreboard => self.toggle_scoreboard(),
            KeyAction::None => {}
        }
        false
    }

    fn accepts_name(&self) -> bool {
        self.ending.as_ref().is_some_and(|ending| ending.accepts_name)
    }
}
