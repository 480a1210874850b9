use engine_logging::{engine_debug, engine_info};

use super::{Effect, ErrorBoundary, FetchStatus, Pokemon, PokemonInfo, PokemonViewModel, RequestId};

/// Requested name, the info panel it drives, and the boundary around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonState {
    pokemon_name: String,
    info: PokemonInfo,
    boundary: ErrorBoundary<String>,
    next_request_id: RequestId,
    /// Requests with a lower id were issued to an info panel that has since
    /// been unmounted; their settlements are dropped.
    mounted_since: RequestId,
    latest_request: Option<RequestId>,
    stale_guard: bool,
    dirty: bool,
}

impl Default for PokemonState {
    fn default() -> Self {
        Self {
            pokemon_name: String::new(),
            info: PokemonInfo::default(),
            boundary: ErrorBoundary::new(vec![String::new()]),
            next_request_id: 1,
            mounted_since: 1,
            latest_request: None,
            stale_guard: false,
            dirty: false,
        }
    }
}

impl PokemonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, only the most recently issued lookup may settle.
    /// Off by default: a slow earlier response overwrites a later one.
    pub fn with_stale_guard(mut self, enabled: bool) -> Self {
        self.stale_guard = enabled;
        self
    }

    pub fn pokemon_name(&self) -> &str {
        &self.pokemon_name
    }

    pub fn info(&self) -> &PokemonInfo {
        &self.info
    }

    pub fn status(&self) -> FetchStatus {
        self.info.status()
    }

    pub fn boundary(&self) -> &ErrorBoundary<String> {
        &self.boundary
    }

    pub fn view(&self) -> PokemonViewModel {
        PokemonViewModel {
            pokemon_name: self.pokemon_name.clone(),
            info: self.boundary.view(|| self.info.render(&self.pokemon_name)),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn submit_name(&mut self, name: String) -> Option<Effect> {
        if name == self.pokemon_name {
            return None;
        }
        self.pokemon_name = name.clone();
        self.dirty = true;

        if self.boundary.set_reset_keys(vec![name.clone()]) {
            engine_debug!("Reset keys changed, remounting info for {:?}", name);
            self.remount_info();
        }

        if name.is_empty() {
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request = Some(request_id);
        self.info.start();
        engine_info!("Fetching pokemon request_id={} name={}", request_id, name);
        Some(Effect::FetchPokemon { request_id, name })
    }

    pub(crate) fn settle(&mut self, request_id: RequestId, result: Result<Pokemon, String>) {
        if request_id < self.mounted_since {
            engine_debug!("Dropping settlement {} for unmounted info", request_id);
            return;
        }
        if self.stale_guard && self.latest_request != Some(request_id) {
            engine_debug!("Dropping stale settlement {}", request_id);
            return;
        }

        match result {
            Ok(pokemon) => self.info.resolve(pokemon),
            Err(message) => self.info.reject(message),
        }
        self.dirty = true;

        if let Err(err) = self.info.render(&self.pokemon_name) {
            engine_info!("Lookup {} failed: {}", request_id, err);
            self.boundary.catch(err);
            self.remount_info();
        }
    }

    pub(crate) fn try_again(&mut self) {
        if !self.boundary.reset() {
            return;
        }
        self.pokemon_name.clear();
        self.boundary.set_reset_keys(vec![String::new()]);
        self.remount_info();
        self.dirty = true;
    }

    fn remount_info(&mut self) {
        self.info = PokemonInfo::default();
        self.mounted_since = self.next_request_id;
    }
}
