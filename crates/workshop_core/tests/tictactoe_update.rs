use pretty_assertions::assert_eq;
use workshop_core::tictactoe::{board_rows, update, Board, Effect, GameState, Mark, Msg};

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::O);
const E: Option<Mark> = None;

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn play(state: GameState, squares: &[usize]) -> GameState {
    squares.iter().fold(state, |state, &index| {
        update(state, Msg::SquareClicked(index)).0
    })
}

#[test]
fn alternating_moves_on_corners_and_center() {
    init_logging();
    let state = play(GameState::new(), &[0, 4, 8]);
    let view = state.view();

    assert_eq!(view.squares, Board::from_cells([X, E, E, E, O, E, E, E, X]));
    assert_eq!(view.winner, None);
    assert_eq!(view.next_value, Mark::O);
    assert_eq!(view.status, "Next player: O");
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.current_step(), 3);
}

#[test]
fn select_square_persists_history_and_step() {
    init_logging();
    let (state, effects) = update(GameState::new(), Msg::SquareClicked(4));

    assert_eq!(
        effects,
        vec![Effect::Persist {
            history: vec![
                Board::empty(),
                Board::from_cells([E, E, E, E, X, E, E, E, E]),
            ],
            current_step: 1,
        }]
    );
    assert_eq!(state.current_step(), 1);
}

#[test]
fn occupied_square_is_ignored() {
    init_logging();
    let mut state = play(GameState::new(), &[4]);
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::SquareClicked(4));

    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn moves_after_a_win_are_ignored() {
    init_logging();
    // X: 0, 1, 2 and O: 3, 4
    let state = play(GameState::new(), &[0, 3, 1, 4, 2]);
    assert_eq!(state.view().status, "Winner: X");
    let before = state.clone();

    let (next, effects) = update(state, Msg::SquareClicked(8));

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn out_of_range_square_is_ignored() {
    init_logging();
    let (next, effects) = update(GameState::new(), Msg::SquareClicked(9));
    assert_eq!(next, GameState::new());
    assert!(effects.is_empty());
}

#[test]
fn full_board_reports_scratch() {
    init_logging();
    // X O X / X O O / O X X
    let state = play(GameState::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let view = state.view();
    assert_eq!(view.winner, None);
    assert!(view.status.starts_with("Scratch"));
    assert_eq!(view.status, "Scratch: Cat's game");
}

#[test]
fn go_to_step_then_move_truncates_future() {
    init_logging();
    let state = play(GameState::new(), &[0, 4, 8, 2]);
    assert_eq!(state.history().len(), 5);

    let (state, effects) = update(state, Msg::StepSelected(1));
    assert_eq!(state.current_step(), 1);
    assert_eq!(state.history().len(), 5);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().squares, Board::from_cells([X, E, E, E, E, E, E, E, E]));
    assert_eq!(state.view().status, "Next player: O");

    let (state, _) = update(state, Msg::SquareClicked(6));
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.current_step(), 2);
    assert_eq!(
        *state.current_board(),
        Board::from_cells([X, E, E, E, E, E, O, E, E])
    );
}

#[test]
fn time_travel_to_start_and_back_keeps_history() {
    init_logging();
    let state = play(GameState::new(), &[0, 4]);
    let (state, _) = update(state, Msg::StepSelected(0));
    assert!(state.current_board().is_empty());

    let (state, _) = update(state, Msg::StepSelected(2));
    assert_eq!(state.current_board().count(Mark::X), 1);
    assert_eq!(state.current_board().count(Mark::O), 1);
}

#[test]
fn go_to_step_out_of_range_is_ignored() {
    init_logging();
    let state = play(GameState::new(), &[0]);
    let before = state.clone();

    let (next, effects) = update(state, Msg::StepSelected(2));

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn going_back_to_a_won_position_allows_moves_again() {
    init_logging();
    let state = play(GameState::new(), &[0, 3, 1, 4, 2]);
    let (state, _) = update(state, Msg::StepSelected(4));
    let (state, effects) = update(state, Msg::SquareClicked(8));

    assert_eq!(effects.len(), 1);
    assert_eq!(state.history().len(), 6);
    assert_eq!(state.view().winner, None);
    assert_eq!(state.view().status, "Next player: O");
}

#[test]
fn restart_resets_from_any_state() {
    init_logging();
    let started = play(GameState::new(), &[0, 3, 1, 4, 2]);
    let (traveled, _) = update(started.clone(), Msg::StepSelected(2));

    for state in [GameState::new(), started, traveled] {
        let (next, effects) = update(state, Msg::RestartClicked);
        assert_eq!(next.history(), &[Board::empty()]);
        assert_eq!(next.current_step(), 0);
        assert_eq!(
            effects,
            vec![Effect::Persist {
                history: vec![Board::empty()],
                current_step: 0,
            }]
        );
    }
}

#[test]
fn move_list_labels_and_current_marker() {
    init_logging();
    let state = play(GameState::new(), &[0, 4]);
    let (state, _) = update(state, Msg::StepSelected(1));
    let moves = state.view().moves;

    let labels: Vec<_> = moves.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Go to game start", "Go to move #1", "Go to move #2"]);
    let current: Vec<_> = moves.iter().map(|row| row.is_current).collect();
    assert_eq!(current, vec![false, true, false]);
}

#[test]
fn restore_accepts_valid_history() {
    init_logging();
    let history = vec![
        Board::empty(),
        Board::from_cells([X, E, E, E, E, E, E, E, E]),
        Board::from_cells([X, O, E, E, E, E, E, E, E]),
    ];

    let (mut state, effects) = update(
        GameState::new(),
        Msg::Restore {
            history: history.clone(),
            current_step: 1,
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.history(), history.as_slice());
    assert_eq!(state.current_step(), 1);
}

#[test]
fn restore_rejects_invalid_history() {
    init_logging();
    let bad = [
        (Vec::new(), 0),
        (vec![Board::from_cells([X, E, E, E, E, E, E, E, E])], 0),
        (vec![Board::empty()], 1),
        (
            vec![Board::empty(), Board::from_cells([O, E, E, E, E, E, E, E, E])],
            1,
        ),
    ];

    for (history, current_step) in bad {
        let (next, effects) = update(
            GameState::new(),
            Msg::Restore {
                history,
                current_step,
            },
        );
        assert_eq!(next, GameState::new());
        assert!(effects.is_empty());
    }
}

#[test]
fn restore_rejects_history_that_skips_or_rewrites_moves() {
    init_logging();
    let finished = Board::from_cells([X, X, X, O, O, E, E, E, E]);
    let broken_chains = [
        // two marks placed in one step
        vec![Board::empty(), Board::from_cells([X, O, E, E, E, E, E, E, E])],
        // an earlier mark changes owner
        vec![
            Board::empty(),
            Board::from_cells([X, E, E, E, E, E, E, E, E]),
            Board::from_cells([O, X, E, E, E, E, E, E, E]),
        ],
        // a mark disappears
        vec![
            Board::empty(),
            Board::from_cells([X, E, E, E, E, E, E, E, E]),
            Board::empty(),
        ],
        // play continues after a win
        vec![
            Board::empty(),
            Board::from_cells([X, E, E, E, E, E, E, E, E]),
            Board::from_cells([X, E, E, O, E, E, E, E, E]),
            Board::from_cells([X, X, E, O, E, E, E, E, E]),
            Board::from_cells([X, X, E, O, O, E, E, E, E]),
            finished,
            Board::from_cells([X, X, X, O, O, E, O, E, E]),
        ],
    ];

    for history in broken_chains {
        let current_step = history.len() - 1;
        let (next, effects) = update(
            GameState::new(),
            Msg::Restore {
                history,
                current_step,
            },
        );
        assert_eq!(next, GameState::new());
        assert!(effects.is_empty());
    }
}

#[test]
fn board_rows_forward_clicked_index() {
    init_logging();
    let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
    let rows = board_rows(&board);

    let labels: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.squares.iter().map(|sq| sq.label).collect())
        .collect();
    assert_eq!(
        labels,
        vec![vec!["X", "", ""], vec!["", "O", ""], vec!["", "", ""]]
    );

    let click = rows[2].squares[1].click();
    assert_eq!(click, Msg::SquareClicked(7));

    let (state, effects) = update(GameState::new(), click);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.current_board().get(7), Some(Mark::X));
}

#[test]
fn noop_changes_nothing() {
    let state = GameState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
