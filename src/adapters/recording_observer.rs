//! In-memory event recorder.
//!
//! Captures every session event in order, which makes it handy for tests and
//! for printing a move log after a scripted replay.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::{
    Error, Result,
    ports::SessionObserver,
    session::Intent,
    tictactoe::{Board, GameStatus, Player},
};

/// A recorded session event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    MoveApplied {
        cursor: usize,
        player: Player,
        cell: usize,
        board: Board,
    },
    Jumped {
        from: usize,
        to: usize,
    },
    Rejected {
        intent: Intent,
        reason: String,
    },
    GameOver {
        status: GameStatus,
    },
    Reset,
}

/// Records session events into shared storage.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// session owns another.
///
/// # Examples
///
/// ```
/// use noughts::adapters::{RecordingObserver, SessionEvent};
/// use noughts::session::GameSession;
///
/// let recorder = RecordingObserver::new();
/// let mut session = GameSession::new().with_observer(recorder.clone());
///
/// session.select_cell(4)?;
/// assert_eq!(recorder.len(), 1);
/// assert!(matches!(recorder.events()[0], SessionEvent::MoveApplied { cell: 4, .. }));
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far
    pub fn events(&self) -> Vec<SessionEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SessionEvent>> {
        // A poisoned buffer still holds every event pushed before the panic.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, event: SessionEvent) -> Result<()> {
        self.lock().push(event);
        Ok(())
    }
}

impl SessionObserver for RecordingObserver {
    fn on_move_applied(
        &mut self,
        cursor: usize,
        player: Player,
        cell: usize,
        board: &Board,
    ) -> Result<()> {
        self.record(SessionEvent::MoveApplied {
            cursor,
            player,
            cell,
            board: *board,
        })
    }

    fn on_jump(&mut self, from: usize, to: usize) -> Result<()> {
        self.record(SessionEvent::Jumped { from, to })
    }

    fn on_rejected(&mut self, intent: &Intent, error: &Error) -> Result<()> {
        self.record(SessionEvent::Rejected {
            intent: *intent,
            reason: error.to_string(),
        })
    }

    fn on_game_over(&mut self, status: GameStatus) -> Result<()> {
        self.record(SessionEvent::GameOver { status })
    }

    fn on_reset(&mut self) -> Result<()> {
        self.record(SessionEvent::Reset)
    }
}
