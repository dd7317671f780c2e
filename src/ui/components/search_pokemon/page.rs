use super::{form::SearchPokemonForm, list::SearchPokemonList};
use crate::config::use_config;
use crate::ui::SearchPokemonContextProvider;
use dioxus::prelude::*;

/// Card search page: search form on top, results below
#[component]
pub fn SearchPokemonPage() -> Element {
    let config = use_config();

    rsx! {
        SearchPokemonContextProvider {
            div { class: "hero",
                div { class: "container",
                    h1 { "Search for pokemon!" }
                    SearchPokemonForm {}
                }
            }
            div { class: "container", SearchPokemonList {} }
            footer { class: "container data-source", "Card data from {config.tcg_api_url}" }
        }
    }
}
