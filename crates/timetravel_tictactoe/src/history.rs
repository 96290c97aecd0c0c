//! Move history: one immutable board snapshot per ply.

use crate::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single snapshot in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The square filled by this ply; `None` for the initial entry.
    pub(crate) selected: Option<Position>,
    /// Board as it stood after this ply.
    pub(crate) board: Board,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board, nothing selected.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Entry recording that `selected` was filled, producing `board`.
    pub fn new(selected: Position, board: Board) -> Self {
        Self {
            selected: Some(selected),
            board,
        }
    }

    /// Coordinate text of the selected square, `"(col, row)"`.
    pub fn coordinates(&self) -> Option<String> {
        self.selected.map(Position::coordinates)
    }
}

/// Ordered snapshots; index 0 is always the initial empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, the initial one included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries in play order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates entries in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Returns a new history that keeps entries `0..=step` and appends `entry`.
    ///
    /// Everything after `step` is discarded, so making a move after jumping
    /// back replaces the abandoned future.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn branch(&self, step: usize, entry: HistoryEntry) -> Self {
        let keep = (step + 1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(entry);
        Self { entries }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn entry(pos: Position, player: Player, base: &Board) -> HistoryEntry {
        HistoryEntry::new(pos, base.with(pos, Square::Occupied(player)))
    }

    #[test]
    fn test_new_history_has_initial_entry() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&HistoryEntry::initial()));
        assert_eq!(history.get(0).and_then(HistoryEntry::coordinates), None);
    }

    #[test]
    fn test_branch_appends_at_tip() {
        let history = History::new();
        let next = history.branch(0, entry(Position::Center, Player::X, &Board::new()));
        assert_eq!(history.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.get(1).and_then(HistoryEntry::coordinates).as_deref(), Some("(2, 2)"));
    }

    #[test]
    fn test_branch_discards_abandoned_future() {
        let mut history = History::new();
        for (step, pos) in [Position::TopLeft, Position::Center, Position::TopRight]
            .into_iter()
            .enumerate()
        {
            let base = *history.entries()[step].board();
            history = history.branch(step, entry(pos, Player::for_step(step), &base));
        }
        assert_eq!(history.len(), 4);

        let base = *history.entries()[1].board();
        let branched = history.branch(1, entry(Position::BottomRight, Player::O, &base));
        assert_eq!(branched.len(), 3);
        assert_eq!(*branched.entries()[2].selected(), Some(Position::BottomRight));
    }
}
