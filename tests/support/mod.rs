#![allow(dead_code)]

use axum::Router;
use pokesave::auth::Auth;
use pokesave::graphql::PokemonSaver;
use pokesave::search::{SearchOutcome, SearchPageState};
use pokesave::tcg::CardSearch;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Serve `router` on an ephemeral local port, returning its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// Submit the current input the way the search form does
pub async fn submit_search(
    state: &mut SearchPageState,
    card_search: &dyn CardSearch,
) -> Option<SearchOutcome> {
    let ticket = state.begin_search()?;
    let result = card_search.search_cards(&ticket.query).await;
    Some(state.finish_search(ticket, result))
}

/// Click a card's save button the way the result list does.
/// Returns `None` when no mutation was sent.
pub async fn click_save(
    state: &mut SearchPageState,
    pokemon_id: &str,
    auth: &dyn Auth,
    saver: &dyn PokemonSaver,
) -> Option<bool> {
    let ticket = state.begin_save(pokemon_id, auth)?;
    let result = saver.save_pokemon(&ticket.token, &ticket.card).await;
    Some(state.finish_save(ticket, result))
}
