//! Property tests over random legal play and random time travel

use noughts::{
    Error, GameSession, GameStatus, Intent,
    tictactoe::{Cell, apply_move, legal_moves, whose_turn, winner},
};
use proptest::prelude::*;

/// Picks cells by index into the current legal moves, so every pick is legal.
fn arb_picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..9)
}

/// Play picks until they run out or the game ends; returns the session.
fn play_picks(picks: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for &pick in picks {
        let moves = legal_moves(session.current());
        if moves.is_empty() {
            break;
        }
        session
            .select_cell(moves[pick % moves.len()])
            .expect("legal move was rejected");
    }
    session
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn history_tracks_move_count(picks in arb_picks()) {
        let session = play_picks(&picks);
        let played = session.move_list().len();
        prop_assert_eq!(session.history().len(), played + 1);
        prop_assert_eq!(session.cursor(), session.history().len() - 1);
    }

    #[test]
    fn turns_alternate(picks in arb_picks()) {
        let session = play_picks(&picks);
        for (index, mv) in session.move_list().iter().enumerate() {
            prop_assert_eq!(mv.player, whose_turn(index));
        }
        for pair in session.move_list().windows(2) {
            prop_assert_eq!(pair[1].player, pair[0].player.opponent());
        }
    }

    #[test]
    fn each_step_fills_exactly_one_cell(picks in arb_picks()) {
        let session = play_picks(&picks);
        for (index, pair) in session.history().snapshots().windows(2).enumerate() {
            let changed: Vec<usize> = (0..9)
                .filter(|&i| pair[0].get(i) != pair[1].get(i))
                .collect();
            prop_assert_eq!(changed.len(), 1);
            prop_assert_eq!(pair[0].get(changed[0]), Some(Cell::Empty));
            prop_assert_eq!(pair[1].get(changed[0]), Some(whose_turn(index).to_cell()));
        }
    }

    #[test]
    fn occupied_cells_are_always_rejected(picks in arb_picks()) {
        let session = play_picks(&picks);
        let board = *session.current();
        if !session.status().is_terminal() {
            for cell in (0..9).filter(|&c| !board.is_empty(c)) {
                let result = apply_move(&board, cell, session.cursor());
                prop_assert!(
                    matches!(result, Err(Error::CellOccupied { position }) if position == cell),
                    "cell {} should be reported occupied", cell
                );
            }
        }
        prop_assert_eq!(*session.current(), board);
    }

    #[test]
    fn won_boards_reject_everything(picks in arb_picks(), cell in 0usize..12) {
        let session = play_picks(&picks);
        if winner(session.current()).is_some() {
            let result = apply_move(session.current(), cell, session.cursor());
            prop_assert!(matches!(result, Err(Error::AlreadyDecided)));
        }
    }

    #[test]
    fn jump_then_move_truncates(picks in arb_picks(), jump in any::<usize>(), pick in any::<usize>()) {
        let mut session = play_picks(&picks);
        let len_before = session.history().len();
        let target = jump % len_before;
        session.dispatch(Intent::JumpToMove(target)).unwrap();
        prop_assert_eq!(session.history().len(), len_before);
        prop_assert_eq!(session.cursor(), target);

        let moves = legal_moves(session.current());
        prop_assume!(!moves.is_empty());
        session.select_cell(moves[pick % moves.len()]).unwrap();
        prop_assert_eq!(session.history().len(), target + 2);
        prop_assert_eq!(session.cursor(), target + 1);
    }

    #[test]
    fn status_matches_winner(picks in arb_picks()) {
        let session = play_picks(&picks);
        match session.status() {
            GameStatus::Won(player) => prop_assert_eq!(winner(session.current()), Some(player)),
            GameStatus::Draw => prop_assert!(session.current().is_full()),
            GameStatus::InProgress => prop_assert!(!legal_moves(session.current()).is_empty()),
        }
    }
}
