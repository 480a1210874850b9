use super::{Effect, GameState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: GameState, msg: Msg) -> (GameState, Vec<Effect>) {
    let changed = match msg {
        Msg::SquareClicked(index) => state.select_square(index),
        Msg::RestartClicked => {
            state.restart();
            true
        }
        Msg::StepSelected(step) => state.go_to_step(step),
        Msg::Restore {
            history,
            current_step,
        } => {
            // Restored values came from the store; writing them back is pointless.
            state.restore(history, current_step);
            false
        }
        Msg::NoOp => false,
    };

    let effects = if changed {
        vec![Effect::Persist {
            history: state.history().to_vec(),
            current_step: state.current_step(),
        }]
    } else {
        Vec::new()
    };

    (state, effects)
}
