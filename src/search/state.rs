use crate::auth::Auth;
use crate::graphql::GraphqlError;
use crate::saved_ids::SavedIdStore;
use crate::tcg::{PokemonCard, TcgError};
use tracing::{debug, error, info};

pub const SAVE_LABEL: &str = "Save this pokemon!";
pub const SAVED_LABEL: &str = "This pokemon has already been saved!";
pub const EMPTY_HEADING: &str = "Search for a pokemon to begin";

/// An issued search. Only the most recently issued one may update results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub query: String,
    generation: u64,
}

/// A save that passed the lookup and login checks
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTicket {
    pub card: PokemonCard,
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results replaced with this many cards
    Applied(usize),
    /// A newer search was issued after this one
    Stale,
    Failed,
}

/// How a result card's save button should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAffordance {
    pub enabled: bool,
    pub label: &'static str,
}

/// State behind the search page: form text, the last result set, and saved card ids
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchPageState {
    input: String,
    results: Vec<PokemonCard>,
    saved_ids: Vec<String>,
    generation: u64,
}

impl SearchPageState {
    /// Start a page session with the ids already persisted in `store`
    pub fn mount(store: &dyn SavedIdStore) -> Self {
        let saved_ids = store.get_saved_ids();
        debug!("Loaded {} saved ids", saved_ids.len());

        Self {
            saved_ids,
            ..Default::default()
        }
    }

    /// End the session, writing the saved ids back once
    pub fn unmount(self, store: &dyn SavedIdStore) {
        if let Err(e) = store.save_ids(&self.saved_ids) {
            error!("Failed to persist saved ids: {}", e);
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn results(&self) -> &[PokemonCard] {
        &self.results
    }

    pub fn saved_ids(&self) -> &[String] {
        &self.saved_ids
    }

    pub fn is_saved(&self, pokemon_id: &str) -> bool {
        self.saved_ids.iter().any(|id| id == pokemon_id)
    }

    pub fn heading(&self) -> String {
        if self.results.is_empty() {
            EMPTY_HEADING.to_string()
        } else {
            format!("Viewing {} results:", self.results.len())
        }
    }

    pub fn save_affordance(&self, pokemon_id: &str) -> SaveAffordance {
        if self.is_saved(pokemon_id) {
            SaveAffordance {
                enabled: false,
                label: SAVED_LABEL,
            }
        } else {
            SaveAffordance {
                enabled: true,
                label: SAVE_LABEL,
            }
        }
    }

    /// Issue a search for the current input. Blank input issues nothing.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.input.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        Some(SearchTicket {
            query: self.input.clone(),
            generation: self.generation,
        })
    }

    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<PokemonCard>, TcgError>,
    ) -> SearchOutcome {
        if ticket.generation != self.generation {
            debug!("Discarding stale results for '{}'", ticket.query);
            return SearchOutcome::Stale;
        }

        match result {
            Ok(cards) => {
                info!("Search '{}' returned {} cards", ticket.query, cards.len());
                let count = cards.len();
                self.results = cards;
                self.input.clear();
                SearchOutcome::Applied(count)
            }
            Err(e) => {
                error!("Search '{}' failed: {}", ticket.query, e);
                SearchOutcome::Failed
            }
        }
    }

    /// Check a save request against the shown results and the login state
    pub fn begin_save(&self, pokemon_id: &str, auth: &dyn Auth) -> Option<SaveTicket> {
        let Some(card) = self.results.iter().find(|card| card.pokemon_id == pokemon_id) else {
            debug!("No result with id '{}' to save", pokemon_id);
            return None;
        };

        if !auth.logged_in() {
            return None;
        }
        let token = auth.get_token()?;

        Some(SaveTicket {
            card: card.clone(),
            token,
        })
    }

    /// Record a finished save. Returns whether the id was added.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<serde_json::Value, GraphqlError>,
    ) -> bool {
        match result {
            Ok(_) => {
                info!("Saved {} ({})", ticket.card.name, ticket.card.pokemon_id);
                self.saved_ids.push(ticket.card.pokemon_id);
                true
            }
            Err(e) => {
                error!("Saving '{}' failed: {}", ticket.card.pokemon_id, e);
                false
            }
        }
    }
}
