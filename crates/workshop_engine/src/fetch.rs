use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use engine_logging::{engine_debug, engine_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::{AttackRecord, FailureKind, FetchError, PokemonRecord};

const POKEMON_QUERY: &str = "
query PokemonInfo($name: String) {
  pokemon(name: $name) {
    id
    number
    name
    image
    attacks {
      special {
        name
        type
        damage
      }
    }
  }
}
";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://graphql-pokemon2.vercel.app/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

/// Produces the display timestamp stored on each fetched record.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// `H:MM SS.mmm`, e.g. `9:05 07.042`.
pub fn format_fetched_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%-H:%M %S%.3f").to_string()
}

#[async_trait::async_trait]
pub trait PokemonFetcher: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<PokemonRecord, FetchError>;
}

/// Looks pokemon up through a GraphQL endpoint.
#[derive(Clone)]
pub struct GraphqlPokemonFetcher {
    settings: FetchSettings,
    clock: Clock,
}

impl GraphqlPokemonFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            settings,
            clock: Arc::new(|| format_fetched_at(&Local::now())),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl PokemonFetcher for GraphqlPokemonFetcher {
    async fn fetch(&self, name: &str) -> Result<PokemonRecord, FetchError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;
        let body = serde_json::json!({
            "query": POKEMON_QUERY,
            "variables": { "name": name.to_lowercase() },
        })
        .to_string();

        engine_debug!("POST {} name={}", endpoint, name);
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json;charset=UTF-8")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = self.read_body(response).await?;
        let parsed = serde_json::from_slice::<GraphqlResponse>(&bytes);

        if !status.is_success() {
            let message = parsed
                .ok()
                .map(|response| response.error_message())
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| status.to_string());
            engine_warn!("Lookup for {} failed with {}: {}", name, status, message);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let parsed =
            parsed.map_err(|err| FetchError::new(FailureKind::InvalidResponse, err.to_string()))?;
        match parsed.data.and_then(|data| data.pokemon) {
            Some(pokemon) => Ok(pokemon.into_record((self.clock)())),
            None => Err(FetchError::new(
                FailureKind::NotFound,
                format!("No pokemon with the name \"{name}\""),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    fn error_message(&self) -> String {
        self.errors
            .iter()
            .map(|err| err.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    pokemon: Option<WirePokemon>,
}

#[derive(Debug, Deserialize)]
struct WirePokemon {
    id: String,
    number: String,
    name: String,
    image: String,
    attacks: Option<WireAttacks>,
}

#[derive(Debug, Deserialize)]
struct WireAttacks {
    #[serde(default)]
    special: Vec<WireAttack>,
}

#[derive(Debug, Deserialize)]
struct WireAttack {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    damage: u32,
}

impl WirePokemon {
    fn into_record(self, fetched_at: String) -> PokemonRecord {
        PokemonRecord {
            id: self.id,
            number: self.number,
            name: self.name,
            image: self.image,
            special_attacks: self
                .attacks
                .map(|attacks| attacks.special)
                .unwrap_or_default()
                .into_iter()
                .map(|attack| AttackRecord {
                    name: attack.name,
                    kind: attack.kind,
                    damage: attack.damage,
                })
                .collect(),
            fetched_at,
        }
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
