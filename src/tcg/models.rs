use serde::{Deserialize, Serialize};

/// Shown in place of a card name the API left blank
pub const NAME_PLACEHOLDER: &str = "No name to display";

/// A card search result as displayed on the search page and sent to the backend on save
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonCard {
    pub pokemon_id: String,
    pub name: String,
    #[serde(rename = "pokedex")]
    pub pokedex_numbers: Vec<u32>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub price: f64,
}

/// `/cards` response wrapper
#[derive(Debug, Deserialize)]
pub(crate) struct CardsResponse {
    pub data: Vec<CardRecord>,
}

/// Individual card record, only the fields the search page uses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub national_pokedex_numbers: Option<Vec<u32>>,
    pub images: Option<CardImages>,
    pub cardmarket: Option<Cardmarket>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CardImages {
    pub small: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Cardmarket {
    pub prices: Option<CardmarketPrices>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardmarketPrices {
    pub average_sell_price: Option<f64>,
}

impl CardRecord {
    /// Display card for this record. Records without an id are unusable as
    /// list keys or save targets and yield `None`.
    pub fn into_card(self) -> Option<PokemonCard> {
        let pokemon_id = self.id.filter(|id| !id.trim().is_empty())?;

        let name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());

        let price = self
            .cardmarket
            .and_then(|market| market.prices)
            .and_then(|prices| prices.average_sell_price)
            .unwrap_or(0.0);

        Some(PokemonCard {
            pokemon_id,
            name,
            pokedex_numbers: self.national_pokedex_numbers.unwrap_or_default(),
            image_url: self.images.and_then(|images| images.small),
            price,
        })
    }
}
