//! Raw-mode terminal session for the CLI UI.
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI runs.
///
/// The screen is restored exactly once: by [`TerminalSession::leave`], on
/// drop, or from the panic hook installed by [`TerminalSession::enter`].
pub struct TerminalSession<B: Backend = CrosstermBackend<Stdout>> {
    tui: Terminal<B>,
    restore: fn() -> io::Result<()>,
    active: bool,
}

impl TerminalSession {
    /// Switches to raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(tui) => Ok(Self::with_restore(tui, leave_screen)),
            Err(e) => {
                let _ = leave_screen();
                Err(e.into())
            }
        }
    }
}

impl<B: Backend> TerminalSession<B> {
    fn with_restore(tui: Terminal<B>, restore: fn() -> io::Result<()>) -> Self {
        Self {
            tui,
            restore,
            active: true,
        }
    }

    pub fn tui(&mut self) -> &mut Terminal<B> {
        &mut self.tui
    }

    /// Restores the terminal; later calls are no-ops.
    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        (self.restore)()?;
        Ok(())
    }
}

impl<B: Backend> Drop for TerminalSession<B> {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::warn!("Failed to restore terminal: {:#}", e);
        }
    }
}

fn leave_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    disable_raw_mode()
}

/// Leaves the alternate screen before the panic message is printed.
fn install_panic_hook() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave_screen();
            previous(info);
        }));
    });
}
