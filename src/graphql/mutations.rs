/// Saves one card to the logged-in user's collection
pub const SAVE_POKEMON: &str = r#"
mutation savePokemon($pokemonData: PokemonInput!) {
  savePokemon(pokemonData: $pokemonData) {
    _id
    username
    savedPokemon {
      pokemonId
      name
      pokedex
      image
      price
    }
  }
}
"#;
