//! Subcommands of the `noughts` binary

pub mod play;
pub mod replay;
pub mod simulate;
