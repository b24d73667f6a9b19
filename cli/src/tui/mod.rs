mod terminal;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use modelfetch_core::selection::{Action, Flow, Selection, Viewport};
use modelfetch_core::Descriptor;
use ratatui::prelude::*;

use terminal::TerminalGuard;

/// How a selection session ended.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Confirmed(Vec<Descriptor>),
    /// The terminal could not show the whole checklist.
    TooSmall,
    /// Ctrl-C.
    Interrupted,
}

pub trait KeySource {
    /// Block until the next key press.
    fn next_key(&mut self) -> Result<KeyEvent>;
}

struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

enum Input {
    Action(Action),
    Interrupt,
    Ignored,
}

fn classify(key: &KeyEvent) -> Input {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Interrupt,
        KeyCode::Up => Input::Action(Action::Up),
        KeyCode::Down => Input::Action(Action::Down),
        KeyCode::Char(' ') => Input::Action(Action::Toggle),
        KeyCode::Enter => Input::Action(Action::Confirm),
        _ => Input::Ignored,
    }
}

/// Run the checklist on the real terminal.
pub fn select(catalog: &[Descriptor]) -> Result<Outcome> {
    let mut guard = TerminalGuard::enter()?;
    run_session(guard.terminal(), &mut CrosstermKeys, catalog)
}

pub fn run_session<B: Backend, K: KeySource>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    catalog: &[Descriptor],
) -> Result<Outcome> {
    let size = terminal.size()?;
    let viewport = Viewport::required(&ui::INSTRUCTIONS, catalog.len());

    if !viewport.fits(size.height as usize, size.width as usize) {
        tracing::debug!(
            rows = size.height,
            cols = size.width,
            need_rows = viewport.rows,
            need_cols = viewport.cols,
            "terminal too small for model list"
        );
        if let Err(e) = terminal.draw(|f| ui::draw_too_small(f)) {
            tracing::debug!("failed to draw size notice: {}", e);
        }
        keys.next_key()?;
        return Ok(Outcome::TooSmall);
    }

    let mut selection = Selection::new(catalog);

    loop {
        if let Err(e) = terminal.draw(|f| ui::draw(f, &selection)) {
            tracing::debug!("redraw failed: {}", e);
        }

        let key = keys.next_key()?;
        match classify(&key) {
            Input::Action(action) => {
                if selection.apply(action) == Flow::Confirmed {
                    return Ok(Outcome::Confirmed(selection.into_selected()));
                }
            }
            Input::Interrupt => return Ok(Outcome::Interrupted),
            Input::Ignored => tracing::debug!(code = ?key.code, "ignored key"),
        }
    }
}
