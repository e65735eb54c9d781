//! CLI infrastructure for the noughts binary
//!
//! This module provides a plain-text front end over the game session: an
//! interactive prompt, scripted replays and random self-play.

pub mod commands;
pub mod config;
pub mod output;
