use crate::search::SaveAffordance;
use crate::tcg::PokemonCard;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchPokemonItemProps {
    pub card: PokemonCard,
    /// Only logged-in users get a save button
    pub show_save: bool,
    pub affordance: SaveAffordance,
    pub on_save: EventHandler<String>,
}

#[component]
pub fn SearchPokemonItem(props: SearchPokemonItemProps) -> Element {
    let card = &props.card;
    let pokedex = card
        .pokedex_numbers
        .iter()
        .map(|number| format!("#{number}"))
        .collect::<Vec<_>>()
        .join(", ");
    let price = format!("{:.2}", card.price);

    rsx! {
        div { class: "card",
            if let Some(image) = &card.image_url {
                img {
                    class: "card-img",
                    src: "{image}",
                    alt: "The cover for {card.name}",
                }
            }
            div { class: "card-body",
                p { class: "small", "Pokemon: {card.name}" }
                if !pokedex.is_empty() {
                    p { class: "small", "Pokédex: {pokedex}" }
                }
                p { class: "small", "Average sell price: {price}" }
                if props.show_save {
                    button {
                        class: "btn btn-info btn-block",
                        disabled: !props.affordance.enabled,
                        onclick: {
                            let pokemon_id = card.pokemon_id.clone();
                            let on_save = props.on_save;
                            move |_| {
                                on_save.call(pokemon_id.clone());
                            }
                        },
                        "{props.affordance.label}"
                    }
                }
            }
        }
    }
}
