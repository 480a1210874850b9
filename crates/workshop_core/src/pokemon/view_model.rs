use super::Pokemon;

pub const PROMPT_TEXT: &str = "Submit a pokemon";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonViewModel {
    pub pokemon_name: String,
    pub info: InfoView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoView {
    /// Nothing requested yet.
    Prompt,
    /// Lookup in flight for `name`.
    Loading { name: String },
    Data(Pokemon),
    /// Error fallback drawn by the boundary, offering "Try again".
    Failed { message: String },
}
