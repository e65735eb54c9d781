//! Text rendering for CLI output

use std::io::{self, Write};

use crate::{
    session::SessionView,
    tictactoe::{Board, CELL_COUNT, Cell},
};

/// Render a board as a 3x3 grid; empty cells show their index
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| match cell {
                    Cell::Empty => (row * 3 + col).to_string(),
                    mark => mark.to_char().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    rows.join("\n--+---+--\n")
}

/// Render the "go to move" list, marking the current entry
pub fn render_history(view: &SessionView) -> String {
    view.moves
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { ">" } else { " " };
            format!("{marker} {:>2}. {}", entry.index, entry.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a full view (board, status and optionally history)
pub fn write_view<W: Write>(out: &mut W, view: &SessionView, show_history: bool) -> io::Result<()> {
    writeln!(out, "{}", render_board(&view.board))?;
    writeln!(out)?;
    writeln!(out, "{}", view.status_line())?;
    if show_history {
        writeln!(out)?;
        writeln!(out, "{}", render_history(view))?;
    }
    Ok(())
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format `part` of `total` as a percentage with one decimal
pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}

/// Help text for the interactive prompt
pub fn play_help() -> String {
    format!(
        "Commands: 0-{} select a cell, goto N, undo, redo, history, hint, reset, help, quit",
        CELL_COUNT - 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameSession;

    #[test]
    fn board_shows_indices_for_empty_cells() {
        let board = Board::from_string("X...O....").unwrap();
        assert_eq!(
            render_board(&board),
            "X | 1 | 2\n--+---+--\n3 | O | 5\n--+---+--\n6 | 7 | 8"
        );
    }

    #[test]
    fn history_marks_cursor() {
        let mut session = GameSession::new();
        session.select_cell(0).unwrap();
        session.jump_to_move(0).unwrap();

        let text = render_history(&session.view());
        assert_eq!(text, ">  0. Go to game start\n   1. Go to move #1");
    }

    #[test]
    fn write_view_includes_status() {
        let session = GameSession::new();
        let mut buffer = Vec::new();
        write_view(&mut buffer, &session.view(), false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("Next player: X\n"));
        assert!(!text.contains("Go to"));
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent(1, 0), "0.0%");
        assert_eq!(percent(1, 4), "25.0%");
    }
}
