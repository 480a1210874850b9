use std::io::{self, BufRead, Write};

use engine_logging::engine_debug;
use workshop_core::tictactoe::{board_rows, update, GameState, Msg};
use workshop_engine::KeyValueStore;

use super::effects::run_game_effects;
use super::persistence::load_game;
use super::ui::input::{parse_game_input, GameInput};
use super::ui::render::{render_game, GAME_HELP};

/// Runs the game until `q` or end of input, returning the final state.
pub(crate) fn run_game(
    store: &mut dyn KeyValueStore,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<GameState> {
    let mut state = GameState::new();
    if let Some(restore) = load_game(store) {
        state = update(state, restore).0;
    }
    state.consume_dirty();
    draw(&mut out, &state)?;

    for line in input.lines() {
        let msg = match parse_game_input(&line?) {
            GameInput::Quit => break,
            GameInput::Restart => Msg::RestartClicked,
            GameInput::GoTo(step) => Msg::StepSelected(step),
            GameInput::Square(index) => {
                let rows = board_rows(state.current_board());
                match rows
                    .iter()
                    .flat_map(|row| row.squares.iter())
                    .find(|square| square.index == index)
                {
                    Some(square) => square.click(),
                    None => Msg::NoOp,
                }
            }
            GameInput::Unknown(text) => {
                engine_debug!("Unrecognised game input {:?}", text);
                writeln!(out, "{GAME_HELP}")?;
                continue;
            }
        };

        let (next, effects) = update(state, msg);
        state = next;
        run_game_effects(store, effects);
        if state.consume_dirty() {
            draw(&mut out, &state)?;
        }
    }

    Ok(state)
}

fn draw(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render_game(&state.view()))?;
    writeln!(out, "{GAME_HELP}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::persistence::{HISTORY_KEY, STEP_KEY};
    use serde_json::json;
    use workshop_core::tictactoe::Mark;
    use workshop_engine::MemoryStore;

    fn play(store: &mut MemoryStore, script: &str) -> (GameState, String) {
        let mut out = Vec::new();
        let state = run_game(store, script.as_bytes(), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn moves_are_persisted_and_restored_on_next_run() {
        let mut store = MemoryStore::new();
        let (state, screen) = play(&mut store, "0\n4\n8\n");

        assert_eq!(state.current_step(), 3);
        assert!(screen.contains("Next player: O"));
        assert_eq!(store.read(STEP_KEY).unwrap(), Some(json!(3)));

        let (restored, _) = play(&mut store, "");
        assert_eq!(restored.history(), state.history());
        assert_eq!(restored.current_step(), 3);
    }

    #[test]
    fn time_travel_and_restart_are_persisted() {
        let mut store = MemoryStore::new();
        let (state, _) = play(&mut store, "0\n4\ng 1\n");
        assert_eq!(state.current_step(), 1);
        assert_eq!(store.read(STEP_KEY).unwrap(), Some(json!(1)));

        let (state, _) = play(&mut store, "r\n");
        assert_eq!(state.history().len(), 1);
        assert_eq!(
            store.read(HISTORY_KEY).unwrap(),
            Some(json!([[null, null, null, null, null, null, null, null, null]]))
        );
    }

    #[test]
    fn quit_stops_reading_and_bad_input_prints_help() {
        let mut store = MemoryStore::new();
        let (state, screen) = play(&mut store, "hello\n9\n2\nq\n5\n");

        assert!(screen.contains(GAME_HELP));
        assert_eq!(state.current_board().get(2), Some(Mark::X));
        assert_eq!(state.current_board().get(5), None);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn corrupt_store_starts_fresh() {
        let mut store = MemoryStore::new();
        store.write(HISTORY_KEY, json!("garbage")).unwrap();
        store.write(STEP_KEY, json!(7)).unwrap();

        let (state, _) = play(&mut store, "");
        assert_eq!(state, GameState::new());
    }
}
