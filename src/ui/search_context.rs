use crate::search::SearchPageState;
use crate::ui::AppContext;
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Search page state plus the services its actions call
#[derive(Clone)]
pub struct SearchPokemonContext {
    pub state: Signal<SearchPageState>,
    app: AppContext,
}

impl SearchPokemonContext {
    pub fn logged_in(&self) -> bool {
        self.app.auth.logged_in()
    }

    /// Search for the current input. Responses to superseded searches are dropped.
    pub fn submit_search(&self) {
        let mut state = self.state;
        let Some(ticket) = state.write().begin_search() else {
            return;
        };

        let card_search = self.app.card_search.clone();

        spawn(async move {
            let result = card_search.search_cards(&ticket.query).await;
            state.write().finish_search(ticket, result);
        });
    }

    pub fn save_pokemon(&self, pokemon_id: String) {
        let mut state = self.state;
        let Some(ticket) = state.read().begin_save(&pokemon_id, self.app.auth.as_ref()) else {
            return;
        };

        let saver = self.app.pokemon_saver.clone();

        spawn(async move {
            let result = saver.save_pokemon(&ticket.token, &ticket.card).await;
            state.write().finish_save(ticket, result);
        });
    }
}

/// Owns the search page state for as long as the page is mounted.
/// Saved ids are loaded on mount and written back on unmount.
#[component]
pub fn SearchPokemonContextProvider(children: Element) -> Element {
    let app = use_context::<AppContext>();

    let state = use_signal({
        let store = app.saved_ids.clone();
        move || SearchPageState::mount(store.as_ref())
    });

    use_drop({
        let store = app.saved_ids.clone();
        move || {
            let mut state = state;
            match state.try_write() {
                Ok(mut current) => {
                    debug!("Search page unmounted, persisting saved ids");
                    std::mem::take(&mut *current).unmount(store.as_ref());
                }
                Err(e) => warn!("Search page state gone before saved ids were persisted: {}", e),
            };
        }
    });

    use_context_provider(move || SearchPokemonContext { state, app });

    rsx! {
        {children}
    }
}
