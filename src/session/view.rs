//! Read-only data handed to the presentation layer after every operation

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, GameStatus, Player};

/// A move recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// One entry of the "go to move N" control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub index: usize,
    pub label: String,
    pub is_current: bool,
}

impl HistoryEntry {
    pub(crate) fn new(index: usize, cursor: usize) -> Self {
        let label = if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        };
        Self {
            index,
            label,
            is_current: index == cursor,
        }
    }
}

/// Snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub board: Board,
    pub status: GameStatus,
    pub cursor: usize,
    /// `None` once the game at the cursor is decided
    pub next_player: Option<Player>,
    pub moves: Vec<HistoryEntry>,
}

impl SessionView {
    /// Single-line status text, e.g. `"Next player: O"`
    pub fn status_line(&self) -> String {
        match (self.status, self.next_player) {
            (GameStatus::Won(player), _) => format!("Winner: {player}"),
            (GameStatus::Draw, _) => "Draw".to_string(),
            (GameStatus::InProgress, Some(player)) => format!("Next player: {player}"),
            (GameStatus::InProgress, None) => "In progress".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entry_labels() {
        let start = HistoryEntry::new(0, 2);
        assert_eq!(start.label, "Go to game start");
        assert!(!start.is_current);

        let second = HistoryEntry::new(2, 2);
        assert_eq!(second.label, "Go to move #2");
        assert!(second.is_current);
    }

    #[test]
    fn status_lines() {
        let mut view = SessionView {
            board: Board::new(),
            status: GameStatus::InProgress,
            cursor: 0,
            next_player: Some(Player::X),
            moves: vec![HistoryEntry::new(0, 0)],
        };
        assert_eq!(view.status_line(), "Next player: X");

        view.status = GameStatus::Won(Player::O);
        view.next_player = None;
        assert_eq!(view.status_line(), "Winner: O");

        view.status = GameStatus::Draw;
        assert_eq!(view.status_line(), "Draw");
    }
}
