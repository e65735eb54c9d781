//! Observer that turns session events into structured log records.

use tracing::info;

use crate::{
    Error, Result,
    ports::SessionObserver,
    session::Intent,
    tictactoe::{Board, GameStatus, Player},
};

/// Logs every session event at `info` under the `noughts::session` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl SessionObserver for TracingObserver {
    fn on_move_applied(
        &mut self,
        cursor: usize,
        player: Player,
        cell: usize,
        board: &Board,
    ) -> Result<()> {
        info!(
            target: "noughts::session",
            cursor,
            %player,
            cell,
            board = %board.encode(),
            "move applied"
        );
        Ok(())
    }

    fn on_jump(&mut self, from: usize, to: usize) -> Result<()> {
        info!(target: "noughts::session", from, to, "jumped");
        Ok(())
    }

    fn on_rejected(&mut self, intent: &Intent, error: &Error) -> Result<()> {
        info!(target: "noughts::session", %intent, %error, "rejected");
        Ok(())
    }

    fn on_game_over(&mut self, status: GameStatus) -> Result<()> {
        info!(target: "noughts::session", ?status, "game over");
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        info!(target: "noughts::session", "reset");
        Ok(())
    }
}
