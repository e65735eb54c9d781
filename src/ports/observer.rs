//! Observer port - abstraction for watching a game session
//!
//! This port defines the interface a presentation layer (or logger, or test
//! recorder) implements to hear about what the session did, without the
//! session knowing how the information is rendered or stored.

use crate::{
    Error, Result,
    session::Intent,
    tictactoe::{Board, GameStatus, Player},
};

/// Observer trait for monitoring a [`GameSession`](crate::session::GameSession)
///
/// # Event Sequence
///
/// For every dispatched intent exactly one of the following fires:
/// - `on_move_applied(...)` after a cell selection was accepted, followed by
///   `on_game_over(status)` when that move decided the game
/// - `on_jump(from, to)` after a history jump
/// - `on_rejected(intent, error)` when the intent was refused; session state
///   is unchanged in that case
///
/// `on_reset()` fires when the session starts over.
///
/// An error returned from an observer is logged by the session and does not
/// undo the transition that triggered it.
///
/// # Examples
///
/// ```
/// use noughts::{ports::SessionObserver, tictactoe::GameStatus};
///
/// struct GameCounter {
///     finished: usize,
/// }
///
/// impl SessionObserver for GameCounter {
///     fn on_game_over(&mut self, _status: GameStatus) -> noughts::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SessionObserver: Send {
    /// Called after a move was appended to the history.
    ///
    /// # Parameters
    ///
    /// * `cursor` - History index of the new snapshot
    /// * `player` - Player whose mark was placed
    /// * `cell` - Position (0-8) of the mark
    /// * `board` - The new current snapshot
    fn on_move_applied(
        &mut self,
        _cursor: usize,
        _player: Player,
        _cell: usize,
        _board: &Board,
    ) -> Result<()> {
        Ok(())
    }

    /// Called after the cursor moved from `from` to `to`.
    fn on_jump(&mut self, _from: usize, _to: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an intent was refused.
    fn on_rejected(&mut self, _intent: &Intent, _error: &Error) -> Result<()> {
        Ok(())
    }

    /// Called when a move produced a terminal status (win or draw).
    fn on_game_over(&mut self, _status: GameStatus) -> Result<()> {
        Ok(())
    }

    /// Called when the session returns to an empty board.
    fn on_reset(&mut self) -> Result<()> {
        Ok(())
    }
}
