//! Play command - interactive game on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Intent,
    adapters::TracingObserver,
    cli::{config::CommonConfig, output},
    session::GameSession,
    tictactoe::{LineAnalyzer, whose_turn},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Hide the move list after each turn
    #[arg(long)]
    pub no_history: bool,
}

/// One line of prompt input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Intent(Intent),
    Undo,
    Redo,
    History,
    Hint,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> crate::Result<Command> {
    Ok(match line.trim().to_ascii_lowercase().as_str() {
        "undo" | "u" => Command::Undo,
        "redo" | "r" => Command::Redo,
        "history" | "h" => Command::History,
        "hint" => Command::Hint,
        "reset" | "new" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Intent(other.parse()?),
    })
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let config = CommonConfig {
        show_history: common.show_history && !args.no_history,
        ..common.clone()
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &config)
}

/// Drive a session from line-oriented input until EOF or `quit`
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, config: &CommonConfig) -> Result<()> {
    let mut session = GameSession::new().with_observer(TracingObserver::new());

    writeln!(out, "{}", output::play_help())?;
    writeln!(out)?;
    output::write_view(&mut out, &session.view(), config.show_history)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "{error}. {}", output::play_help())?;
                continue;
            }
        };

        let view = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", output::play_help())?;
                continue;
            }
            Command::History => {
                writeln!(out, "{}", output::render_history(&session.view()))?;
                continue;
            }
            Command::Hint => {
                let view = session.view();
                if view.status.is_terminal() {
                    writeln!(out, "{}", view.status_line())?;
                    continue;
                }
                let player = whose_turn(session.cursor());
                let wins = LineAnalyzer::winning_moves(session.current().cells(), player);
                let blocks =
                    LineAnalyzer::winning_moves(session.current().cells(), player.opponent());
                writeln!(out, "Winning cells for {player}: {wins:?}")?;
                writeln!(out, "Cells to block: {blocks:?}")?;
                continue;
            }
            Command::Undo => match session.undo() {
                Some(view) => view,
                None => {
                    writeln!(out, "Already at game start")?;
                    continue;
                }
            },
            Command::Redo => match session.redo() {
                Some(view) => view,
                None => {
                    writeln!(out, "Nothing to redo")?;
                    continue;
                }
            },
            Command::Reset => session.reset(),
            Command::Intent(intent) => match session.dispatch(intent) {
                Ok(view) => view,
                Err(error) => {
                    writeln!(out, "Rejected: {error}")?;
                    continue;
                }
            },
        };

        writeln!(out)?;
        output::write_view(&mut out, &view, config.show_history)?;
    }

    out.flush()?;
    Ok(())
}
