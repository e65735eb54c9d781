//! Replay command - apply a scripted sequence of moves and print the result

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    adapters::{RecordingObserver, SessionEvent, TracingObserver},
    cli::{config::CommonConfig, output},
    session::{GameSession, Move, SessionView},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a sequence of moves")]
pub struct ReplayArgs {
    /// Cells to play in order (0-8), X first
    #[arg(required = true)]
    pub cells: Vec<usize>,

    /// Jump to this history entry after playing all moves
    #[arg(long)]
    pub goto: Option<usize>,

    /// Print the recorded event log
    #[arg(long)]
    pub events: bool,
}

/// Everything a replay produced
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub view: SessionView,
    pub moves: Vec<Move>,
    pub events: Vec<SessionEvent>,
}

/// Play `cells` then optionally jump to `goto`.
///
/// Stops at the first rejected move and reports which one it was.
pub fn replay(cells: &[usize], goto: Option<usize>) -> Result<ReplayReport> {
    let recorder = RecordingObserver::new();
    let mut session = GameSession::new()
        .with_observer(TracingObserver::new())
        .with_observer(recorder.clone());

    for (number, &cell) in cells.iter().enumerate() {
        session
            .select_cell(cell)
            .with_context(|| format!("move {} (cell {cell}) was rejected", number + 1))?;
    }

    if let Some(index) = goto {
        session
            .jump_to_move(index)
            .with_context(|| format!("cannot jump to move {index}"))?;
    }

    Ok(ReplayReport {
        view: session.view(),
        moves: session.move_list(),
        events: recorder.events(),
    })
}

pub fn execute(args: ReplayArgs, common: &CommonConfig) -> Result<()> {
    let report = replay(&args.cells, args.goto)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if common.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    output::write_view(&mut out, &report.view, common.show_history)?;

    if args.events {
        writeln!(out)?;
        for event in &report.events {
            writeln!(out, "{}", serde_json::to_string(event)?)?;
        }
    }

    Ok(())
}
