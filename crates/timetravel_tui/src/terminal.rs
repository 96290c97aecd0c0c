//! Terminal setup and the event loop.

use crate::{App, TuiConfig, Transition, ui};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs `restore` when dropped.
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the game until the player quits.
///
/// The terminal is restored on every exit path once raw mode is on.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!(sort_order = %config.sort_order(), "Starting terminal game");

    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.sort_order());
    let res = event_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.state().history().len() - 1, "Terminal game ended");
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Transition::Quit {
                return Ok(());
            }
        }
    }
}
