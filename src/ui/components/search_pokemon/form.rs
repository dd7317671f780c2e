use crate::ui::SearchPokemonContext;
use dioxus::prelude::*;

/// Search input with submit button. Enter submits too.
#[component]
pub fn SearchPokemonForm() -> Element {
    let search_ctx = use_context::<SearchPokemonContext>();
    let mut state = search_ctx.state;

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                search_ctx.submit_search();
            },
            input {
                class: "search-input",
                name: "searchInput",
                r#type: "text",
                placeholder: "Search for a pokemon",
                value: state.read().input().to_string(),
                onmounted: move |element| {
                    spawn(async move {
                        let _ = element.set_focus(true).await;
                    });
                },
                oninput: move |event: FormEvent| {
                    state.write().set_input(event.value());
                },
            }
            button { class: "btn btn-success", r#type: "submit", "Submit Search" }
        }
    }
}
