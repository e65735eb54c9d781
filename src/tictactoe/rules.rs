//! Turn-based rule engine
//!
//! Pure, stateless functions over [`Board`] snapshots. Whose turn it is comes
//! from the cursor (number of moves already played), never from the board.

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, CELL_COUNT, Player},
    lines::LineAnalyzer,
};
use crate::{Error, Result};

/// Status of a game as seen from a single snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Won and Draw accept no further moves
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Player to move after `cursor` moves: X on even, O on odd
pub fn whose_turn(cursor: usize) -> Player {
    if cursor.is_multiple_of(2) {
        Player::X
    } else {
        Player::O
    }
}

/// Winner of the first completed line in evaluation order, if any
pub fn winner(board: &Board) -> Option<Player> {
    LineAnalyzer::winning_line(board.cells()).and_then(|[a, _, _]| board.cells()[a].to_player())
}

/// Full board with no winner
pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && board.is_full()
}

pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Cells the player at `cursor` may select; empty once the game is decided
pub fn legal_moves(board: &Board) -> Vec<usize> {
    if status(board).is_terminal() {
        return Vec::new();
    }
    board.empty_positions()
}

/// Place the mark of the player to move at `cursor` on `cell`.
///
/// Checks run in a fixed order: a decided board rejects everything with
/// [`Error::AlreadyDecided`], then the index is bounds-checked, then the
/// target must be empty. The input board is never modified.
#[must_use = "apply_move returns a new board; the original is unchanged"]
pub fn apply_move(board: &Board, cell: usize, cursor: usize) -> Result<Board> {
    if status(board).is_terminal() {
        return Err(Error::AlreadyDecided);
    }

    if cell >= CELL_COUNT {
        return Err(Error::IndexOutOfRange {
            index: cell,
            len: CELL_COUNT,
        });
    }

    if !board.is_empty(cell) {
        return Err(Error::CellOccupied { position: cell });
    }

    Ok(board.with_cell(cell, whose_turn(cursor).to_cell()))
}
