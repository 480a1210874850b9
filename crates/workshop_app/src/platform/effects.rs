use engine_logging::engine_info;
use workshop_core::{pokemon, tictactoe};
use workshop_engine::{EngineEvent, EngineHandle, KeyValueStore, PokemonRecord};

use super::persistence;

pub(crate) fn run_game_effects(store: &mut dyn KeyValueStore, effects: Vec<tictactoe::Effect>) {
    for effect in effects {
        match effect {
            tictactoe::Effect::Persist {
                history,
                current_step,
            } => persistence::save_game(store, &history, current_step),
        }
    }
}

pub(crate) fn run_pokemon_effects(engine: &EngineHandle, effects: Vec<pokemon::Effect>) {
    for effect in effects {
        match effect {
            pokemon::Effect::FetchPokemon { request_id, name } => {
                engine_info!("FetchPokemon request_id={} name={}", request_id, name);
                engine.fetch(request_id, name);
            }
        }
    }
}

pub(crate) fn map_engine_event(event: EngineEvent) -> pokemon::Msg {
    match event {
        EngineEvent::FetchSettled { request_id, result } => pokemon::Msg::FetchSettled {
            request_id,
            result: result.map(map_record).map_err(|err| err.message),
        },
    }
}

fn map_record(record: PokemonRecord) -> pokemon::Pokemon {
    pokemon::Pokemon {
        id: record.id,
        number: record.number,
        name: record.name,
        image: record.image,
        attacks: record
            .special_attacks
            .into_iter()
            .map(|attack| pokemon::Attack {
                name: attack.name,
                kind: attack.kind,
                damage: attack.damage,
            })
            .collect(),
        fetched_at: record.fetched_at,
    }
}
