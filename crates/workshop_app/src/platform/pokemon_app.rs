use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::Context;
use engine_logging::engine_debug;
use workshop_core::pokemon::{update, FetchStatus, Msg, PokemonState};
use workshop_engine::EngineHandle;

use super::config::AppConfig;
use super::effects::{map_engine_event, run_pokemon_effects};
use super::ui::input::{parse_pokemon_input, PokemonInput};
use super::ui::render::{render_pokemon, POKEMON_HELP};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// How long to wait for an in-flight lookup once input has ended.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn run_pokemon(
    config: &AppConfig,
    lines: mpsc::Receiver<String>,
    out: impl Write,
) -> anyhow::Result<PokemonState> {
    let engine = EngineHandle::new(config.fetch_settings()).context("starting fetch engine")?;
    let state = PokemonState::new().with_stale_guard(config.ignore_stale_responses);
    Ok(run_pokemon_with(state, &engine, lines, out, DRAIN_TIMEOUT)?)
}

/// Every transition runs on the calling thread: input lines and engine
/// settlements are interleaved here, one message at a time.
pub(crate) fn run_pokemon_with(
    mut state: PokemonState,
    engine: &EngineHandle,
    lines: mpsc::Receiver<String>,
    mut out: impl Write,
    drain_timeout: Duration,
) -> io::Result<PokemonState> {
    draw(&mut out, &state)?;
    let mut input_open = true;

    loop {
        while let Some(event) = engine.try_recv() {
            state = dispatch(state, map_engine_event(event), engine, &mut out)?;
        }

        if !input_open {
            if state.status() != FetchStatus::Pending {
                break;
            }
            match engine.recv_timeout(drain_timeout) {
                Some(event) => state = dispatch(state, map_engine_event(event), engine, &mut out)?,
                None => break,
            }
            continue;
        }

        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                let msg = match parse_pokemon_input(&line) {
                    PokemonInput::Quit => break,
                    PokemonInput::TryAgain => Msg::TryAgainClicked,
                    PokemonInput::Name(name) => Msg::NameSubmitted(name),
                };
                state = dispatch(state, msg, engine, &mut out)?;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                engine_debug!("Input closed");
                input_open = false;
            }
        }
    }

    Ok(state)
}

fn dispatch(
    state: PokemonState,
    msg: Msg,
    engine: &EngineHandle,
    out: &mut impl Write,
) -> io::Result<PokemonState> {
    let (mut state, effects) = update(state, msg);
    run_pokemon_effects(engine, effects);
    if state.consume_dirty() {
        draw(out, &state)?;
    }
    Ok(state)
}

fn draw(out: &mut impl Write, state: &PokemonState) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render_pokemon(&state.view()))?;
    writeln!(out, "{POKEMON_HELP}")?;
    out.flush()
}
