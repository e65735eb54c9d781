//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{Board, GameSession, Intent, Result, tictactoe::apply_move};

/// Play `cells` from an empty board, X first, panicking on a rejected move.
pub fn board_after(cells: &[usize]) -> Board {
    cells
        .iter()
        .enumerate()
        .fold(Board::new(), |board, (cursor, &cell)| {
            apply_move(&board, cell, cursor)
                .unwrap_or_else(|e| panic!("move {cursor} (cell {cell}) rejected: {e}"))
        })
}

/// Session with `cells` already played.
pub fn session_after(cells: &[usize]) -> Result<GameSession> {
    let mut session = GameSession::new();
    for &cell in cells {
        session.dispatch(Intent::SelectCell(cell))?;
    }
    Ok(session)
}

/// A full board with no three in a row, reached by legal play.
///
/// ```text
/// X O X
/// X O X
/// O X O
/// ```
pub const DRAW_SEQUENCE: [usize; 9] = [0, 1, 2, 4, 3, 6, 5, 8, 7];

/// X completes the top row on its third move.
pub const TOP_ROW_WIN: [usize; 5] = [0, 4, 1, 8, 2];
