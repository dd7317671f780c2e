#![cfg(feature = "test-utils")]

mod support;

use pokesave::saved_ids::{FileSavedIdStore, SavedIdStore};
use pokesave::search::state::{SAVED_LABEL, SAVE_LABEL};
use pokesave::search::SearchPageState;
use pokesave::test_support::{card, MemorySavedIdStore, MockCardSearch, MockPokemonSaver, StaticAuth};
use tempfile::TempDir;

use crate::support::{click_save, submit_search, tracing_init};

async fn state_with_results(store: &dyn SavedIdStore) -> SearchPageState {
    let card_search = MockCardSearch::new();
    card_search.push_response(Ok(vec![card("base1-58", "Pikachu"), card("base1-2", "Blastoise")]));

    let mut state = SearchPageState::mount(store);
    state.set_input("pikachu");
    submit_search(&mut state, &card_search).await;
    state
}

#[tokio::test]
async fn test_save_marks_card_saved() {
    tracing_init();

    let store = MemorySavedIdStore::new();
    let mut state = state_with_results(&store).await;
    let saver = MockPokemonSaver::new();
    let auth = StaticAuth::with_token("jwt-token");

    assert_eq!(state.save_affordance("base1-58").label, SAVE_LABEL);

    let saved = click_save(&mut state, "base1-58", &auth, &saver).await;

    assert_eq!(saved, Some(true));
    assert!(state.is_saved("base1-58"));
    assert!(!state.is_saved("base1-2"));

    let affordance = state.save_affordance("base1-58");
    assert!(!affordance.enabled);
    assert_eq!(affordance.label, SAVED_LABEL);

    let calls = saver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "jwt-token");
    assert_eq!(calls[0].1.name, "Pikachu");
}

#[tokio::test]
async fn test_save_while_logged_out_sends_nothing() {
    tracing_init();

    let store = MemorySavedIdStore::new();
    let mut state = state_with_results(&store).await;
    let saver = MockPokemonSaver::new();

    let saved = click_save(&mut state, "base1-58", &StaticAuth::logged_out(), &saver).await;

    assert_eq!(saved, None);
    assert!(saver.calls().is_empty());
    assert!(state.saved_ids().is_empty());
}

#[tokio::test]
async fn test_rejected_save_leaves_saved_ids() {
    tracing_init();

    let store = MemorySavedIdStore::with_ids(vec!["xy1-1".to_string()]);
    let mut state = state_with_results(&store).await;
    let saver = MockPokemonSaver::failing();

    let saved = click_save(&mut state, "base1-2", &StaticAuth::with_token("jwt"), &saver).await;

    assert_eq!(saved, Some(false));
    assert_eq!(saver.calls().len(), 1);
    assert_eq!(state.saved_ids(), &["xy1-1".to_string()]);
}

#[tokio::test]
async fn test_unmount_writes_once() {
    tracing_init();

    let store = MemorySavedIdStore::new();
    let mut state = state_with_results(&store).await;
    let saver = MockPokemonSaver::new();
    let auth = StaticAuth::with_token("jwt");

    click_save(&mut state, "base1-58", &auth, &saver).await;
    click_save(&mut state, "base1-2", &auth, &saver).await;
    assert_eq!(store.write_count(), 0);

    state.unmount(&store);

    assert_eq!(store.write_count(), 1);
    assert_eq!(
        store.get_saved_ids(),
        vec!["base1-58".to_string(), "base1-2".to_string()]
    );
}

#[tokio::test]
async fn test_saved_ids_survive_page_sessions() {
    tracing_init();

    let dir = TempDir::new().unwrap();
    let store = FileSavedIdStore::new(dir.path());
    let auth = StaticAuth::with_token("jwt");
    let saver = MockPokemonSaver::new();

    let mut first = state_with_results(&store).await;
    click_save(&mut first, "base1-2", &auth, &saver).await;
    first.unmount(&store);

    let second = state_with_results(&store).await;
    assert!(second.is_saved("base1-2"));
    assert!(!second.save_affordance("base1-2").enabled);
    assert!(second.save_affordance("base1-58").enabled);
}
