use crate::models::pokemon::{Pokemon, PokemonType};
use crate::repository::database::Database;
use crate::repository::pokemon_repository;

pub fn test_pokemons() -> Vec<Pokemon> {
    vec![
        Pokemon {
            name_fr: "Carapuce".to_string(),
            name_ar: "سكويرتل".to_string(),
            name_jp: "ゼニガメ".to_string(),
            ..Pokemon::new("Squirtle", PokemonType::Water, 88)
        },
        Pokemon {
            name_fr: "Bulbizarre".to_string(),
            ..Pokemon::new("Bulbasaur", PokemonType::Grass, 90)
        },
        Pokemon {
            active: false,
            ..Pokemon::new("Gengar", PokemonType::Ghost, 240)
        },
        Pokemon::new("Steelix", PokemonType::Steel, 350),
        Pokemon {
            active: false,
            ..Pokemon::new("Sylveon", PokemonType::Fairy, 50)
        },
    ]
}

pub fn init_test_pokemons(db: &Database) -> Vec<Pokemon> {
    test_pokemons()
        .into_iter()
        .map(|pokemon| {
            pokemon_repository::create_pokemon(db, pokemon).expect("Failed to create test pokemon")
        })
        .collect()
}
