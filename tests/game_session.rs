//! End-to-end session scenarios: moves, jumps and history truncation

mod common;

use common::{DRAW_SEQUENCE, TOP_ROW_WIN, session_after};
use noughts::{
    Board, Error, GameSession, GameStatus, HistoryStore, Intent, Player,
    adapters::{RecordingObserver, SessionEvent},
    session::Move,
};

mod scenarios {
    use super::*;

    #[test]
    fn top_row_win() {
        let session = session_after(&TOP_ROW_WIN).unwrap();
        assert_eq!(session.status(), GameStatus::Won(Player::X));

        let view = session.view();
        assert_eq!(view.status_line(), "Winner: X");
        assert_eq!(view.next_player, None);
    }

    #[test]
    fn draw() {
        let session = session_after(&DRAW_SEQUENCE).unwrap();
        assert_eq!(session.status(), GameStatus::Draw);
        assert_eq!(session.view().status_line(), "Draw");
    }

    #[test]
    fn jump_to_start_then_move_truncates() {
        let mut session = session_after(&[0, 4, 1, 8]).unwrap();
        assert_eq!(session.history().len(), 5);

        session.dispatch(Intent::JumpToMove(0)).unwrap();
        assert_eq!(session.history().len(), 5);

        let view = session.dispatch(Intent::SelectCell(5)).unwrap();
        assert_eq!(session.history().len(), 2);
        assert_eq!(view.moves.len(), 2);
        assert_eq!(view.cursor, 1);
        assert_eq!(
            session.move_list(),
            vec![Move {
                position: 5,
                player: Player::X
            }]
        );
    }
}

mod time_travel {
    use super::*;

    #[test]
    fn jumping_back_reopens_a_decided_game() {
        let mut session = session_after(&TOP_ROW_WIN).unwrap();
        assert!(matches!(
            session.select_cell(5),
            Err(Error::AlreadyDecided)
        ));

        let view = session.jump_to_move(4).unwrap();
        assert_eq!(view.status, GameStatus::InProgress);
        assert_eq!(view.next_player, Some(Player::X));

        // X blocks differently this time; O now to move.
        let view = session.select_cell(6).unwrap();
        assert_eq!(view.status, GameStatus::InProgress);
        assert_eq!(view.next_player, Some(Player::O));
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn turn_comes_from_cursor_after_jump() {
        let mut session = session_after(&[0, 4, 1]).unwrap();
        let view = session.jump_to_move(1).unwrap();
        assert_eq!(view.next_player, Some(Player::O));

        session.select_cell(8).unwrap();
        assert_eq!(session.current().get(8), Some(noughts::Cell::O));
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut session = session_after(&[0, 4]).unwrap();
        let before = session.history().clone();

        let err = session.jump_to_move(3).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(session.history(), &before);
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn jumping_to_current_entry_is_a_no_op() {
        let mut session = session_after(&[0, 4]).unwrap();
        let before = session.view();
        let after = session.jump_to_move(2).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn history_entries_follow_cursor() {
        let mut session = session_after(&[0, 4, 1]).unwrap();
        session.jump_to_move(1).unwrap();

        let view = session.view();
        let current: Vec<usize> = view
            .moves
            .iter()
            .filter(|entry| entry.is_current)
            .map(|entry| entry.index)
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert_eq!(view.moves[3].label, "Go to move #3");
    }
}

mod observers {
    use super::*;

    #[test]
    fn rejected_intents_are_reported_without_state_change() {
        let recorder = RecordingObserver::new();
        let mut session = GameSession::new().with_observer(recorder.clone());

        session.select_cell(4).unwrap();
        assert!(session.select_cell(4).is_err());
        assert!(session.select_cell(9).is_err());
        assert!(session.jump_to_move(7).is_err());

        let events = recorder.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            SessionEvent::MoveApplied {
                cursor: 1,
                player: Player::X,
                cell: 4,
                ..
            }
        ));
        assert!(
            events[1..]
                .iter()
                .all(|event| matches!(event, SessionEvent::Rejected { .. }))
        );
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn draw_emits_game_over_once() {
        let recorder = RecordingObserver::new();
        let mut session = GameSession::new().with_observer(recorder.clone());
        for cell in DRAW_SEQUENCE {
            session.select_cell(cell).unwrap();
        }

        let game_overs: Vec<_> = recorder
            .events()
            .into_iter()
            .filter(|event| matches!(event, SessionEvent::GameOver { .. }))
            .collect();
        assert_eq!(
            game_overs,
            vec![SessionEvent::GameOver {
                status: GameStatus::Draw
            }]
        );
    }

    #[test]
    fn reset_is_reported() {
        let recorder = RecordingObserver::new();
        let mut session = GameSession::new().with_observer(recorder.clone());
        session.select_cell(0).unwrap();
        session.reset();

        assert_eq!(recorder.events().last(), Some(&SessionEvent::Reset));
        assert_eq!(session.current(), &Board::new());
    }
}

mod resuming {
    use super::*;

    #[test]
    fn history_must_start_from_empty_board() {
        let history = HistoryStore::new(Board::from_string("X........").unwrap());
        let err = GameSession::from_history(history).unwrap_err();
        assert!(matches!(err, Error::InvalidHistory { .. }));
        assert_eq!(
            err.to_string(),
            "invalid history: entry 0 is not the empty board"
        );
    }

    #[test]
    fn moves_after_a_decided_board_are_refused() {
        let mut history = session_after(&TOP_ROW_WIN).unwrap().history().clone();
        assert_eq!(common::board_after(&TOP_ROW_WIN).encode(), "XXX.O...O");
        history.append(Board::from_string("XXX.OO..O").unwrap());

        assert!(GameSession::from_history(history).is_err());
    }

    #[test]
    fn saved_history_resumes_with_turn_from_cursor() {
        let mut original = session_after(&[0, 4, 1]).unwrap();
        original.jump_to_move(1).unwrap();
        let json = serde_json::to_string(original.history()).unwrap();

        let history: HistoryStore<Board> = serde_json::from_str(&json).unwrap();
        let mut session = GameSession::from_history(history).unwrap();
        assert_eq!(session.view(), original.view());

        session.select_cell(8).unwrap();
        assert_eq!(session.current().get(8), Some(noughts::Cell::O));
        assert_eq!(session.history().len(), 3);
    }
}

#[test]
fn view_serializes_for_presentation() {
    let session = session_after(&[4]).unwrap();
    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["next_player"], "O");
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
}
