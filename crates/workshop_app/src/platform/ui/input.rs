//! Maps typed lines to user actions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GameInput {
    Square(usize),
    Restart,
    GoTo(usize),
    Quit,
    Unknown(String),
}

pub(crate) fn parse_game_input(line: &str) -> GameInput {
    let line = line.trim();
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("q"), None, None) => GameInput::Quit,
        (Some("r"), None, None) => GameInput::Restart,
        (Some("g"), Some(step), None) => step
            .parse()
            .map_or_else(|_| GameInput::Unknown(line.to_string()), GameInput::GoTo),
        (Some(square), None, None) => square
            .parse()
            .map_or_else(|_| GameInput::Unknown(line.to_string()), GameInput::Square),
        _ => GameInput::Unknown(line.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PokemonInput {
    Name(String),
    TryAgain,
    Quit,
}

/// Every other line, including an empty one, is a submitted name.
pub(crate) fn parse_pokemon_input(line: &str) -> PokemonInput {
    match line.trim() {
        ":q" => PokemonInput::Quit,
        ":retry" => PokemonInput::TryAgain,
        name => PokemonInput::Name(name.to_string()),
    }
}
