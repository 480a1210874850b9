//! Pokemon lookup: request lifecycle, error boundary and view model.
mod boundary;
mod effect;
mod info;
mod msg;
mod state;
mod types;
mod update;
mod view_model;

pub use boundary::ErrorBoundary;
pub use effect::Effect;
pub use info::{FetchStatus, InfoError, PokemonInfo};
pub use msg::Msg;
pub use state::PokemonState;
pub use types::{Attack, Pokemon, RequestId};
pub use update::update;
pub use view_model::{InfoView, PokemonViewModel, PROMPT_TEXT};
