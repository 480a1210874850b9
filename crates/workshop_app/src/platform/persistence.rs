use engine_logging::{engine_error, engine_warn};
use workshop_core::tictactoe::{Board, Mark, Msg};
use workshop_engine::{load_or_default, save_value, KeyValueStore};

pub(crate) const HISTORY_KEY: &str = "tic-tac-toe:history";
pub(crate) const STEP_KEY: &str = "currentStep";

/// Nine cells of `null`, `"X"` or `"O"`.
type PersistedBoard = Vec<Option<String>>;

/// Builds the restore message from stored values, or `None` when nothing
/// usable is stored.
pub(crate) fn load_game(store: &dyn KeyValueStore) -> Option<Msg> {
    let persisted: Vec<PersistedBoard> = load_or_default(store, HISTORY_KEY, Vec::new);
    if persisted.is_empty() {
        return None;
    }
    let current_step: usize = load_or_default(store, STEP_KEY, || 0);

    let history = persisted
        .into_iter()
        .map(decode_board)
        .collect::<Option<Vec<_>>>();
    match history {
        Some(history) => Some(Msg::Restore {
            history,
            current_step,
        }),
        None => {
            engine_warn!("Stored history under {:?} has malformed boards", HISTORY_KEY);
            None
        }
    }
}

pub(crate) fn save_game(store: &mut dyn KeyValueStore, history: &[Board], current_step: usize) {
    let encoded: Vec<PersistedBoard> = history.iter().map(encode_board).collect();
    if let Err(err) = save_value(store, HISTORY_KEY, &encoded) {
        engine_error!("Failed to persist history: {}", err);
        return;
    }
    if let Err(err) = save_value(store, STEP_KEY, &current_step) {
        engine_error!("Failed to persist current step: {}", err);
    }
}

fn encode_board(board: &Board) -> PersistedBoard {
    board
        .cells()
        .iter()
        .map(|cell| cell.map(|mark| mark.as_str().to_string()))
        .collect()
}

fn decode_board(cells: PersistedBoard) -> Option<Board> {
    let cells: [Option<String>; 9] = cells.try_into().ok()?;
    let mut decoded = [None; 9];
    for (slot, cell) in decoded.iter_mut().zip(cells) {
        *slot = match cell.as_deref() {
            None => None,
            Some("X") => Some(Mark::X),
            Some("O") => Some(Mark::O),
            Some(_) => return None,
        };
    }
    Some(Board::from_cells(decoded))
}
