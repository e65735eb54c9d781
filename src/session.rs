//! Game session: history store plus rule engine behind a single reducer
//!
//! A session owns one [`HistoryStore<Board>`] and funnels every user action
//! through [`reduce`]. Rejected intents leave the session untouched; accepted
//! ones replace the history and are reported to the registered observers.

pub mod intent;
pub mod view;

use std::fmt;

use tracing::{debug, warn};

pub use intent::Intent;
pub use view::{HistoryEntry, Move, SessionView};

use crate::{
    Error, Result,
    history::HistoryStore,
    ports::SessionObserver,
    tictactoe::{Board, GameStatus, apply_move, status, whose_turn},
};

/// Pure state transition: the history that results from applying `intent`.
///
/// # Errors
///
/// - [`Error::AlreadyDecided`](crate::Error::AlreadyDecided),
///   [`Error::CellOccupied`](crate::Error::CellOccupied) or
///   [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) for a refused
///   cell selection
/// - [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) for a jump
///   past the recorded history
pub fn reduce(history: &HistoryStore<Board>, intent: Intent) -> Result<HistoryStore<Board>> {
    let mut next = history.clone();
    match intent {
        Intent::SelectCell(cell) => {
            let board = apply_move(history.current(), cell, history.cursor())?;
            next.append(board);
        }
        Intent::JumpToMove(index) => next.go_to(index)?,
    }
    Ok(next)
}

/// Replay every step of `history` through the rule engine
fn check_history(history: &HistoryStore<Board>) -> Result<()> {
    let snapshots = history.snapshots();
    if snapshots.first() != Some(&Board::new()) {
        return Err(Error::InvalidHistory {
            reason: "entry 0 is not the empty board".to_string(),
        });
    }

    for (index, pair) in snapshots.windows(2).enumerate() {
        let replayed = pair[0]
            .find_changed_position(&pair[1])
            .and_then(|cell| apply_move(&pair[0], cell, index).ok());
        if replayed != Some(pair[1]) {
            return Err(Error::InvalidHistory {
                reason: format!(
                    "entry {} is not a legal {} move after entry {index}",
                    index + 1,
                    whose_turn(index)
                ),
            });
        }
    }
    Ok(())
}

/// A single game with time travel
///
/// # Examples
///
/// ```
/// use noughts::{
///     session::{GameSession, Intent},
///     tictactoe::{GameStatus, Player},
/// };
///
/// let mut session = GameSession::new();
/// for cell in [0, 4, 1, 8, 2] {
///     session.dispatch(Intent::SelectCell(cell))?;
/// }
/// assert_eq!(session.status(), GameStatus::Won(Player::X));
///
/// // Step back and take a different line; the abandoned moves are dropped.
/// session.dispatch(Intent::JumpToMove(2))?;
/// let view = session.dispatch(Intent::SelectCell(6))?;
/// assert_eq!(view.moves.len(), 4);
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct GameSession {
    history: HistoryStore<Board>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Start from an empty board with X to move
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(Board::new()),
            observers: Vec::new(),
        }
    }

    /// Resume from an existing history, e.g. one restored from JSON.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHistory`] unless entry 0 is the empty board and every
    /// later entry is the legal move of [`whose_turn`] at the entry before it.
    pub fn from_history(history: HistoryStore<Board>) -> Result<Self> {
        check_history(&history)?;
        Ok(Self {
            history,
            observers: Vec::new(),
        })
    }

    /// Register an observer (builder style)
    pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.add_observer(Box::new(observer));
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn history(&self) -> &HistoryStore<Board> {
        &self.history
    }

    /// Board at the cursor
    pub fn current(&self) -> &Board {
        self.history.current()
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn status(&self) -> GameStatus {
        status(self.history.current())
    }

    /// Apply an intent, returning the refreshed view.
    ///
    /// On error the session is unchanged and observers receive
    /// [`SessionObserver::on_rejected`].
    pub fn dispatch(&mut self, intent: Intent) -> Result<SessionView> {
        let next = match reduce(&self.history, intent) {
            Ok(next) => next,
            Err(error) => {
                debug!(%intent, %error, cursor = self.cursor(), "intent rejected");
                self.notify(|observer| observer.on_rejected(&intent, &error));
                return Err(error);
            }
        };

        let from = self.history.cursor();
        self.history = next;
        let cursor = self.history.cursor();
        debug!(%intent, from, cursor, len = self.history.len(), "intent applied");

        match intent {
            Intent::SelectCell(cell) => {
                let board = *self.history.current();
                let player = whose_turn(from);
                self.notify(|observer| observer.on_move_applied(cursor, player, cell, &board));

                let status = status(&board);
                if status.is_terminal() {
                    debug!(?status, cursor, "game decided");
                    self.notify(|observer| observer.on_game_over(status));
                }
            }
            Intent::JumpToMove(_) => {
                self.notify(|observer| observer.on_jump(from, cursor));
            }
        }

        Ok(self.view())
    }

    pub fn select_cell(&mut self, cell: usize) -> Result<SessionView> {
        self.dispatch(Intent::SelectCell(cell))
    }

    pub fn jump_to_move(&mut self, index: usize) -> Result<SessionView> {
        self.dispatch(Intent::JumpToMove(index))
    }

    /// Step one move back; `None` at the game start
    pub fn undo(&mut self) -> Option<SessionView> {
        let index = self.cursor().checked_sub(1)?;
        self.jump_to_move(index).ok()
    }

    /// Step one move forward; `None` when there is no future to replay
    pub fn redo(&mut self) -> Option<SessionView> {
        if self.history.is_at_end() {
            return None;
        }
        self.jump_to_move(self.cursor() + 1).ok()
    }

    /// Drop the whole history and start over
    pub fn reset(&mut self) -> SessionView {
        self.history = HistoryStore::new(Board::new());
        debug!("session reset");
        self.notify(|observer| observer.on_reset());
        self.view()
    }

    /// Derived read-only data for the presentation layer
    pub fn view(&self) -> SessionView {
        let board = *self.history.current();
        let status = status(&board);
        let cursor = self.history.cursor();
        SessionView {
            board,
            status,
            cursor,
            next_player: (!status.is_terminal()).then(|| whose_turn(cursor)),
            moves: (0..self.history.len())
                .map(|index| HistoryEntry::new(index, cursor))
                .collect(),
        }
    }

    /// The move that produced each history entry after the first, including
    /// entries past the cursor
    pub fn move_list(&self) -> Vec<Move> {
        self.history
            .snapshots()
            .windows(2)
            .enumerate()
            .filter_map(|(index, pair)| {
                pair[0].find_changed_position(&pair[1]).map(|position| Move {
                    position,
                    player: whose_turn(index),
                })
            })
            .collect()
    }

    fn notify<F>(&mut self, mut event: F)
    where
        F: FnMut(&mut dyn SessionObserver) -> Result<()>,
    {
        for observer in &mut self.observers {
            if let Err(error) = event(observer.as_mut()) {
                warn!(%error, "session observer failed");
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
