use super::{Effect, Msg, PokemonState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PokemonState, msg: Msg) -> (PokemonState, Vec<Effect>) {
    let effects = match msg {
        Msg::NameSubmitted(name) => state.submit_name(name).into_iter().collect(),
        Msg::FetchSettled { request_id, result } => {
            state.settle(request_id, result);
            Vec::new()
        }
        Msg::TryAgainClicked => {
            state.try_again();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
