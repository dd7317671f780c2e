pub mod app;
pub mod search_pokemon;

pub use app::App;
pub use search_pokemon::SearchPokemonPage;
