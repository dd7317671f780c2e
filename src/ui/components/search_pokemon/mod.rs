mod form;
mod item;
mod list;
mod page;

pub use form::SearchPokemonForm;
pub use item::SearchPokemonItem;
pub use list::SearchPokemonList;
pub use page::SearchPokemonPage;
