use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};

use crate::logging;

/// Owns the full-screen terminal for one session. Raw mode and the
/// alternate screen are released when the guard drops, on every path out
/// of the session including panics. Log output is held back for the same
/// span.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        install_panic_hook();
        logging::hold();

        if let Err(e) = enable_raw_mode() {
            logging::release();
            return Err(e.into());
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore();
            return Err(e.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e.into())
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Best effort: each step runs even if an earlier one failed. Held log
/// lines are flushed only once the normal screen is back.
fn restore() {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    logging::release();

    if let Err(e) = raw {
        tracing::warn!("failed to leave raw mode: {}", e);
    }
    if let Err(e) = screen {
        tracing::warn!("failed to leave alternate screen: {}", e);
    }
}

// Restore before the default hook prints, otherwise the panic message is
// written to the alternate screen and lost.
fn install_panic_hook() {
    static INSTALLED: std::sync::Once = std::sync::Once::new();
    INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}
