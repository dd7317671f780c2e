// Test support utilities for both unit and integration tests

use crate::auth::Auth;
use crate::graphql::{GraphqlError, PokemonSaver};
use crate::saved_ids::{SavedIdStore, SavedIdsError};
use crate::tcg::{CardSearch, PokemonCard, TcgError};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Minimal card for tests
pub fn card(pokemon_id: &str, name: &str) -> PokemonCard {
    PokemonCard {
        pokemon_id: pokemon_id.to_string(),
        name: name.to_string(),
        pokedex_numbers: Vec::new(),
        image_url: None,
        price: 0.0,
    }
}

/// Fixed login state
pub struct StaticAuth {
    token: Option<String>,
}

impl StaticAuth {
    pub fn logged_out() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }
}

impl Auth for StaticAuth {
    fn logged_in(&self) -> bool {
        self.token.is_some()
    }

    fn get_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// In-memory saved id store that counts writes
#[derive(Default)]
pub struct MemorySavedIdStore {
    ids: Mutex<Vec<String>>,
    writes: Mutex<usize>,
}

impl MemorySavedIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: Vec<String>) -> Self {
        Self {
            ids: Mutex::new(ids),
            writes: Mutex::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SavedIdStore for MemorySavedIdStore {
    fn get_saved_ids(&self) -> Vec<String> {
        self.ids.lock().unwrap().clone()
    }

    fn save_ids(&self, ids: &[String]) -> Result<(), SavedIdsError> {
        *self.ids.lock().unwrap() = ids.to_vec();
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Card search that replays queued responses and records queries
#[derive(Default)]
pub struct MockCardSearch {
    responses: Mutex<VecDeque<Result<Vec<PokemonCard>, TcgError>>>,
    queries: Mutex<Vec<String>>,
}

impl MockCardSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Result<Vec<PokemonCard>, TcgError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CardSearch for MockCardSearch {
    async fn search_cards(&self, query: &str) -> Result<Vec<PokemonCard>, TcgError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Saver that succeeds unless told to fail, recording each call
#[derive(Default)]
pub struct MockPokemonSaver {
    fail: bool,
    calls: Mutex<Vec<(String, PokemonCard)>>,
}

impl MockPokemonSaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, PokemonCard)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PokemonSaver for MockPokemonSaver {
    async fn save_pokemon(&self, token: &str, card: &PokemonCard) -> Result<Value, GraphqlError> {
        self.calls
            .lock()
            .unwrap()
            .push((token.to_string(), card.clone()));

        if self.fail {
            Err(GraphqlError::Errors("Not logged in".to_string()))
        } else {
            Ok(json!({ "savePokemon": { "savedPokemon": [card] } }))
        }
    }
}
