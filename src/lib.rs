//! Tic-Tac-Toe with time travel
//!
//! This crate provides:
//! - A pure rule engine over immutable board snapshots
//! - A generic history store with a movable cursor
//! - A game session that routes user intents through a single reducer
//! - Observer ports and adapters for presentation and logging
//! - A small command-line front end

pub mod adapters;
pub mod cli;
pub mod error;
pub mod history;
pub mod ports;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use history::HistoryStore;
pub use session::{GameSession, Intent, SessionView, reduce};
pub use tictactoe::{Board, Cell, GameStatus, Player};
