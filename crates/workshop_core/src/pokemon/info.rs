use std::fmt;

use super::{InfoView, Pokemon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

/// Request lifecycle of the info panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PokemonInfo {
    status: FetchStatus,
    pokemon: Option<Pokemon>,
    error: Option<String>,
}

impl PokemonInfo {
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn pokemon(&self) -> Option<&Pokemon> {
        self.pokemon.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn start(&mut self) {
        *self = Self {
            status: FetchStatus::Pending,
            pokemon: None,
            error: None,
        };
    }

    pub(crate) fn resolve(&mut self, pokemon: Pokemon) {
        *self = Self {
            status: FetchStatus::Resolved,
            pokemon: Some(pokemon),
            error: None,
        };
    }

    pub(crate) fn reject(&mut self, message: String) {
        *self = Self {
            status: FetchStatus::Rejected,
            pokemon: None,
            error: Some(message),
        };
    }

    /// A rejected lookup has no view of its own; it raises [`InfoError`]
    /// for the enclosing [`super::ErrorBoundary`].
    pub fn render(&self, pokemon_name: &str) -> Result<InfoView, InfoError> {
        match (self.status, &self.pokemon) {
            (FetchStatus::Rejected, _) => Err(InfoError {
                message: self.error.clone().unwrap_or_default(),
            }),
            (FetchStatus::Resolved, Some(pokemon)) => Ok(InfoView::Data(pokemon.clone())),
            (FetchStatus::Pending, _) => Ok(InfoView::Loading {
                name: pokemon_name.to_string(),
            }),
            (FetchStatus::Idle, _) | (FetchStatus::Resolved, None) => Ok(InfoView::Prompt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoError {
    pub message: String,
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InfoError {}
