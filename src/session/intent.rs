//! User intents submitted to a session

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", content = "index", rename_all = "snake_case")]
pub enum Intent {
    /// Place the current player's mark on a cell (0-8)
    SelectCell(usize),
    /// Move the history cursor to an existing entry
    JumpToMove(usize),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::SelectCell(cell) => write!(f, "select {cell}"),
            Intent::JumpToMove(index) => write!(f, "goto {index}"),
        }
    }
}

/// Parses `"4"`, `"select 4"`, `"goto 2"` or `"jump 2"`.
impl FromStr for Intent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidIntent {
            input: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let first = parts.next().ok_or_else(invalid)?;
        let second = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let parse_index = |token: &str| token.parse::<usize>().map_err(|_| invalid());

        match (first.to_ascii_lowercase().as_str(), second) {
            (_, None) => parse_index(first).map(Intent::SelectCell),
            ("select" | "play", Some(arg)) => parse_index(arg).map(Intent::SelectCell),
            ("goto" | "jump", Some(arg)) => parse_index(arg).map(Intent::JumpToMove),
            _ => Err(invalid()),
        }
    }
}
