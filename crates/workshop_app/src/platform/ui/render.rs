use std::fmt::Write;

use workshop_core::pokemon::{InfoView, Pokemon, PokemonViewModel, PROMPT_TEXT};
use workshop_core::tictactoe::{board_rows, GameViewModel};

pub(crate) const GAME_HELP: &str = "0-8: play square | g N: go to step N | r: restart | q: quit";
pub(crate) const POKEMON_HELP: &str =
    "Which pokemon? (try pikachu, charizard or mew) | :retry | :q";

pub(crate) fn render_game(view: &GameViewModel) -> String {
    let mut out = String::new();
    let rows = board_rows(&view.squares);
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .squares
            .iter()
            .map(|square| match square.label {
                // Blank cells show their index so they can be typed.
                "" => format!("({})", square.index),
                label => format!(" {label} "),
            })
            .collect();
        let _ = writeln!(out, " {} ", cells.join("|"));
        if i < rows.len() - 1 {
            let _ = writeln!(out, "----+---+----");
        }
    }
    let _ = writeln!(out, "[restart]");
    let _ = writeln!(out, "{}", view.status);
    for row in &view.moves {
        let marker = if row.is_current { " (current)" } else { "" };
        let _ = writeln!(out, "{:>2}. {}{}", row.step, row.label, marker);
    }
    out
}

pub(crate) fn render_pokemon(view: &PokemonViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Requested: {:?}", view.pokemon_name);
    let _ = writeln!(out, "----------------------------------------");
    match &view.info {
        InfoView::Prompt => {
            let _ = writeln!(out, "{PROMPT_TEXT}");
        }
        InfoView::Loading { name } => {
            let _ = writeln!(out, "Loading {name}...");
        }
        InfoView::Data(pokemon) => render_pokemon_data(&mut out, pokemon),
        InfoView::Failed { message } => {
            let _ = writeln!(out, "Something went wrong:");
            let _ = writeln!(out, "{message}");
            let _ = writeln!(out, "[Try again] (:retry)");
        }
    }
    out
}

fn render_pokemon_data(out: &mut String, pokemon: &Pokemon) {
    let _ = writeln!(out, "{} #{}", pokemon.name, pokemon.number);
    let _ = writeln!(out, "{}", pokemon.image);
    if pokemon.attacks.is_empty() {
        let _ = writeln!(out, "No special attacks");
    } else {
        let _ = writeln!(out, "Special attacks:");
        for attack in &pokemon.attacks {
            let _ = writeln!(
                out,
                "  {:<16} {:<10} {:>4}",
                attack.name, attack.kind, attack.damage
            );
        }
    }
    let _ = writeln!(out, "fetched at {}", pokemon.fetched_at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use workshop_core::pokemon::Attack;
    use workshop_core::tictactoe::{update, GameState, Msg};

    #[test]
    fn game_screen_shows_board_status_and_moves() {
        let (state, _) = update(GameState::new(), Msg::SquareClicked(0));
        let (state, _) = update(state, Msg::SquareClicked(4));

        assert_eq!(
            render_game(&state.view()),
            concat!(
                "  X |(1)|(2) \n",
                "----+---+----\n",
                " (3)| O |(5) \n",
                "----+---+----\n",
                " (6)|(7)|(8) \n",
                "[restart]\n",
                "Next player: X\n",
                " 0. Go to game start\n",
                " 1. Go to move #1\n",
                " 2. Go to move #2 (current)\n",
            )
        );
    }

    #[test]
    fn pokemon_screens() {
        let prompt = PokemonViewModel {
            pokemon_name: String::new(),
            info: InfoView::Prompt,
        };
        assert!(render_pokemon(&prompt).contains("Submit a pokemon"));

        let failed = PokemonViewModel {
            pokemon_name: "mew".into(),
            info: InfoView::Failed {
                message: "No pokemon with the name \"mew\"".into(),
            },
        };
        let text = render_pokemon(&failed);
        assert!(text.contains("Something went wrong:\nNo pokemon with the name \"mew\"\n"));
        assert!(text.contains("Try again"));

        let data = PokemonViewModel {
            pokemon_name: "pikachu".into(),
            info: InfoView::Data(Pokemon {
                id: "1".into(),
                number: "025".into(),
                name: "Pikachu".into(),
                image: "pikachu.jpg".into(),
                attacks: vec![Attack {
                    name: "Thunder".into(),
                    kind: "Electric".into(),
                    damage: 100,
                }],
                fetched_at: "9:05 07.042".into(),
            }),
        };
        let text = render_pokemon(&data);
        assert!(text.contains("Pikachu #025\n"));
        assert!(text.contains("Thunder"));
        assert!(text.ends_with("fetched at 9:05 07.042\n"));
    }
}
