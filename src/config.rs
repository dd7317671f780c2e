use crate::graphql::client::DEFAULT_ENDPOINT;
use crate::tcg::client::DEFAULT_BASE_URL;
use dioxus::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the Pokémon TCG API
    pub tcg_api_url: String,
    /// Optional API key, raises the TCG API rate limit
    pub tcg_api_key: Option<String>,
    /// GraphQL endpoint of the user backend
    pub graphql_url: String,
    /// Where local app state (saved card ids) is kept
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tcg_api_url =
            non_empty("POKESAVE_TCG_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let tcg_api_key = non_empty("POKESAVE_TCG_API_KEY");
        let graphql_url =
            non_empty("POKESAVE_GRAPHQL_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let data_dir = non_empty("POKESAVE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        info!("Config: TCG API at {}", tcg_api_url);
        info!("Config: GraphQL backend at {}", graphql_url);
        info!("Config: Data directory {}", data_dir.display());

        Self {
            tcg_api_url,
            tcg_api_key,
            graphql_url,
            data_dir,
        }
    }
}

/// Configuration provided to the app at launch
pub fn use_config() -> Config {
    use_context::<Config>()
}

/// ~/.pokesave, or the working directory when there is no home
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".pokesave"))
        .unwrap_or_else(|| PathBuf::from(".pokesave"))
}
