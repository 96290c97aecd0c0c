//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use timetravel_tictactoe::{GameEvent, GameState, GameView, Position, SortOrder, render};
use tracing::{debug, info, instrument};

use crate::input::move_cursor;

/// Which pane receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; `Enter` plays the square.
    #[default]
    Board,
    /// Arrows move through the move list; `Enter` jumps to the entry.
    History,
}

impl Focus {
    /// Switches between the two panes.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// The result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// The game lives in an immutable [`GameState`] that is replaced on every
/// event; cursor and focus are presentation state owned by the terminal only.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    list_cursor: usize,
}

impl App {
    /// Creates a new application with the move list in the given order.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            state: GameState::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            list_cursor: 0,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Display index of the highlighted move-list entry.
    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// Display tree of the current state.
    pub fn view(&self) -> GameView {
        render(&self.state)
    }

    /// Feeds an event through the reducer.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) {
        let next = self.state.apply(event);
        if next == self.state {
            debug!("State unchanged");
        }
        self.state = next;
        self.clamp_list_cursor();
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Transition::Quit;
            }
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_sort(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.dispatch(GameEvent::Click(pos));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Transition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(GameEvent::Click(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let len = self.state.history().len();
        match code {
            KeyCode::Up => self.list_cursor = self.list_cursor.saturating_sub(1),
            KeyCode::Down => self.list_cursor = (self.list_cursor + 1).min(len - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(step) = self.step_at(self.list_cursor) {
                    self.dispatch(GameEvent::Jump(step));
                }
            }
            _ => {}
        }
    }

    /// Entering the list highlights the step being viewed.
    fn switch_focus(&mut self) {
        self.focus = self.focus.toggle();
        if self.focus == Focus::History {
            self.list_cursor = self.display_index(self.state.step_number());
        }
    }

    /// Flips the list order, keeping the highlight on the same step.
    fn toggle_sort(&mut self) {
        let step = self.step_at(self.list_cursor);
        self.dispatch(GameEvent::SortHistory(self.state.sort_order().toggled()));
        if let Some(step) = step {
            self.list_cursor = self.display_index(step);
        }
    }

    /// History step shown at display row `index`.
    fn step_at(&self, index: usize) -> Option<usize> {
        self.view().moves().get(index).map(|entry| entry.step())
    }

    /// Display row of history step `step`.
    fn display_index(&self, step: usize) -> usize {
        match self.state.sort_order() {
            SortOrder::Ascending => step,
            SortOrder::Descending => self.state.history().len() - 1 - step,
        }
    }

    fn clamp_list_cursor(&mut self) {
        self.list_cursor = self.list_cursor.min(self.state.history().len() - 1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
