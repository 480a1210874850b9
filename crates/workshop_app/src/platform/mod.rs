//! Terminal front-end: wires stdin, the pure core and the engine together.
mod cli;
mod config;
mod effects;
mod game_app;
mod persistence;
mod pokemon_app;
mod ui;

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_info, engine_warn};
use workshop_engine::{JsonFileStore, StorageError};

use cli::{Cli, Exercise};
use config::AppConfig;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;
    engine_logging::initialize(config.log_destination, config.log_level(), &config.log_file);
    engine_info!("Starting {:?} with config {:?}", cli.exercise, cli.config);

    let stdout = io::stdout();
    match cli.exercise {
        Exercise::Tictactoe => {
            let mut store = open_store(&config)?;
            let stdin = io::stdin();
            game_app::run_game(&mut store, stdin.lock(), stdout.lock())?;
        }
        Exercise::Pokemon => {
            pokemon_app::run_pokemon(&config, spawn_stdin_reader(), stdout.lock())?;
        }
    }
    Ok(())
}

fn open_store(config: &AppConfig) -> anyhow::Result<JsonFileStore> {
    match JsonFileStore::open(&config.storage_dir) {
        Ok(store) => Ok(store),
        Err(err @ StorageError::Malformed { .. }) => {
            engine_warn!("{}; starting with an empty store", err);
            Ok(JsonFileStore::empty(&config.storage_dir))
        }
        Err(err) => Err(err)
            .with_context(|| format!("opening storage in {:?}", config.storage_dir)),
    }
}

/// Forwards stdin lines over a channel so the pokemon loop can also poll the engine.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
