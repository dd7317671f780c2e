use crate::auth::Auth;
use crate::graphql::PokemonSaver;
use crate::saved_ids::SavedIdStore;
use crate::tcg::CardSearch;
use std::sync::Arc;

/// Services shared with every page, provided once at launch
#[derive(Clone)]
pub struct AppContext {
    pub card_search: Arc<dyn CardSearch>,
    pub pokemon_saver: Arc<dyn PokemonSaver>,
    pub auth: Arc<dyn Auth>,
    pub saved_ids: Arc<dyn SavedIdStore>,
}
