pub mod client;
pub mod models;

pub use client::{PokemonTcgClient, TcgError, PAGE_SIZE};
pub use models::PokemonCard;

/// Card lookup seam so the search page can run against a mock in tests
#[async_trait::async_trait]
pub trait CardSearch: Send + Sync {
    async fn search_cards(&self, query: &str) -> Result<Vec<PokemonCard>, TcgError>;
}
