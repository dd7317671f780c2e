use crate::tcg::models::{CardRecord, CardsResponse, PokemonCard};
use crate::tcg::CardSearch;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// Results are always requested as the first page of this size
pub const PAGE_SIZE: u32 = 25;

const USER_AGENT: &str = "pokesave/0.1";

#[derive(Error, Debug)]
pub enum TcgError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct PokemonTcgClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl PokemonTcgClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The query is templated into the URL as typed, without encoding
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/cards?q=name:{}&page=1&pageSize={}",
            self.base_url, query, PAGE_SIZE
        )
    }

    /// Search cards by name, returning the first page
    pub async fn search_cards(&self, query: &str) -> Result<Vec<PokemonCard>, TcgError> {
        let url = self.search_url(query);
        debug!("Searching cards: {}", url);

        let mut request = self.client.get(&url).header("User-Agent", USER_AGENT);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-Api-Key", api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            let cards: CardsResponse = serde_json::from_slice(&body)?;

            let total = cards.data.len();
            let cards: Vec<PokemonCard> = cards
                .data
                .into_iter()
                .filter_map(CardRecord::into_card)
                .collect();
            if cards.len() < total {
                debug!("Skipped {} card records without an id", total - cards.len());
            }

            Ok(cards)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate limit hit searching for '{}'", query);
            Err(TcgError::RateLimit)
        } else {
            warn!("Card search for '{}' failed: Status {}", query, status);
            Err(TcgError::Status(status))
        }
    }
}

#[async_trait::async_trait]
impl CardSearch for PokemonTcgClient {
    async fn search_cards(&self, query: &str) -> Result<Vec<PokemonCard>, TcgError> {
        PokemonTcgClient::search_cards(self, query).await
    }
}
