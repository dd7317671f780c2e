use crate::graphql::mutations::SAVE_POKEMON;
use crate::graphql::PokemonSaver;
use crate::tcg::PokemonCard;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/graphql";

#[derive(Error, Debug)]
pub enum GraphqlError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("GraphQL errors: {0}")]
    Errors(String),
    #[error("GraphQL response had no data")]
    EmptyResponse,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Run a query or mutation, returning the `data` object
    pub async fn execute<V: Serialize>(
        &self,
        document: &str,
        variables: V,
        token: Option<&str>,
    ) -> Result<Value, GraphqlError> {
        let body = GraphqlRequest {
            query: document,
            variables,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("GraphQL request to {} failed: Status {}", self.endpoint, status);
            return Err(GraphqlError::Status(status));
        }

        let body = response.bytes().await?;
        let response: GraphqlResponse = serde_json::from_slice(&body)?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(GraphqlError::Errors(messages.join("; ")));
        }

        match response.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(GraphqlError::EmptyResponse),
        }
    }
}

#[async_trait::async_trait]
impl PokemonSaver for GraphqlClient {
    async fn save_pokemon(&self, token: &str, card: &PokemonCard) -> Result<Value, GraphqlError> {
        debug!("Saving {} ({})", card.name, card.pokemon_id);
        self.execute(SAVE_POKEMON, json!({ "pokemonData": card }), Some(token))
            .await
    }
}
