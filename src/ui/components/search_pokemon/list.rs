use super::item::SearchPokemonItem;
use crate::ui::SearchPokemonContext;
use dioxus::prelude::*;

#[component]
pub fn SearchPokemonList() -> Element {
    let search_ctx = use_context::<SearchPokemonContext>();
    let show_save = search_ctx.logged_in();

    let on_save = {
        let search_ctx = search_ctx.clone();
        move |pokemon_id: String| search_ctx.save_pokemon(pokemon_id)
    };

    let state = search_ctx.state.read();
    let heading = state.heading();

    rsx! {
        h2 { class: "results-heading", "{heading}" }
        div { class: "card-grid",
            for card in state.results().iter() {
                SearchPokemonItem {
                    key: "{card.pokemon_id}",
                    card: card.clone(),
                    show_save,
                    affordance: state.save_affordance(&card.pokemon_id),
                    on_save: on_save.clone(),
                }
            }
        }
    }
}
