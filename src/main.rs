use pokesave::auth::{Auth, KeyringAuth};
use pokesave::config::Config;
use pokesave::graphql::{GraphqlClient, PokemonSaver};
use pokesave::saved_ids::{FileSavedIdStore, SavedIdStore};
use pokesave::tcg::{CardSearch, PokemonTcgClient};
use pokesave::ui::{make_config, App};
use pokesave::AppContext;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokesave=info")),
        )
        .init();

    info!("Starting pokesave");

    let config = Config::load();

    let auth: Arc<dyn Auth> = match KeyringAuth::new() {
        Ok(auth) => Arc::new(auth),
        Err(e) => {
            error!("Failed to open keyring: {}", e);
            std::process::exit(1);
        }
    };

    let card_search: Arc<dyn CardSearch> = Arc::new(PokemonTcgClient::with_base_url(
        config.tcg_api_url.clone(),
        config.tcg_api_key.clone(),
    ));
    let pokemon_saver: Arc<dyn PokemonSaver> = Arc::new(GraphqlClient::new(config.graphql_url.clone()));
    let saved_ids: Arc<dyn SavedIdStore> = Arc::new(FileSavedIdStore::new(&config.data_dir));

    let app_context = AppContext {
        card_search,
        pokemon_saver,
        auth,
        saved_ids,
    };

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(config)
        .with_context(app_context)
        .launch(App);
}
