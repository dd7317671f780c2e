pub mod client;
pub mod mutations;

pub use client::{GraphqlClient, GraphqlError};

use crate::tcg::PokemonCard;
use serde_json::Value;

/// Persists a card to the user's account on the backend
#[async_trait::async_trait]
pub trait PokemonSaver: Send + Sync {
    async fn save_pokemon(&self, token: &str, card: &PokemonCard) -> Result<Value, GraphqlError>;
}
