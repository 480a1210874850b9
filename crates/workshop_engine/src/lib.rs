//! Workshop engine: persistence and remote lookups behind the pure core.
mod engine;
mod fetch;
mod storage;
mod types;

pub use engine::EngineHandle;
pub use fetch::{format_fetched_at, Clock, FetchSettings, GraphqlPokemonFetcher, PokemonFetcher};
pub use storage::{
    load_or_default, save_value, JsonFileStore, KeyValueStore, MemoryStore, StorageError,
};
pub use types::{AttackRecord, EngineEvent, FailureKind, FetchError, PokemonRecord, RequestId};
