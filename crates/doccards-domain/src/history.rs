//! Undo/redo over board snapshots.
//!
//! Boards are immutable values, so history is just a pair of stacks of
//! previous and undone snapshots.

use crate::CardBoard;
use std::collections::VecDeque;

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug)]
pub struct HistoryManager {
    /// Most recent snapshot at the back.
    undo_stack: VecDeque<CardBoard>,
    redo_stack: VecDeque<CardBoard>,
    limit: usize,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// Keep at most `limit` undo steps; the oldest are dropped first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Record the board as it was before a command ran.
    ///
    /// Any new action invalidates the redo history.
    pub fn capture_before_command(&mut self, snapshot: CardBoard) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Step back. Returns the board to restore, or `None` when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &CardBoard) -> Option<CardBoard> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(current.clone());
        Some(previous)
    }

    pub fn redo(&mut self, current: &CardBoard) -> Option<CardBoard> {
        let next = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seeded_board;

    #[test]
    fn test_undo_restores_deleted_card_with_same_id() {
        let mut history = HistoryManager::new();
        let before = seeded_board();
        let after = before.delete_card(1);
        history.capture_before_command(before.clone());

        let restored = history.undo(&after).unwrap();
        assert_eq!(restored, before);
        assert!(restored.contains(1));
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_after_undo() {
        let mut history = HistoryManager::new();
        let before = seeded_board();
        let after = before.add_card();
        history.capture_before_command(before.clone());

        let undone = history.undo(&after).unwrap();
        let redone = history.redo(&undone).unwrap();
        assert_eq!(redone, after);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_nothing_to_undo() {
        let mut history = HistoryManager::new();
        assert!(history.undo(&seeded_board()).is_none());
        assert!(history.redo(&seeded_board()).is_none());
    }

    #[test]
    fn test_redo_cleared_on_new_action() {
        let mut history = HistoryManager::new();
        let board = seeded_board();

        history.capture_before_command(board.clone());
        history.undo(&board.add_card());
        assert!(history.can_redo());

        history.capture_before_command(board);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = HistoryManager::with_limit(2);
        let mut board = CardBoard::new();
        for _ in 0..5 {
            history.capture_before_command(board.clone());
            board = board.add_card();
        }
        assert_eq!(history.undo_depth(), 2);

        let first = history.undo(&board).unwrap();
        assert_eq!(first.len(), 4);
        let second = history.undo(&first).unwrap();
        assert_eq!(second.len(), 3);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryManager::new();
        history.capture_before_command(seeded_board());
        history.clear();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
