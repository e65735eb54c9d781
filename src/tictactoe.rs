//! Tic-Tac-Toe board and rule engine

pub mod board;
pub mod lines;
pub mod rules;

pub use board::{Board, CELL_COUNT, Cell, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{GameStatus, apply_move, is_draw, legal_moves, status, whose_turn, winner};
