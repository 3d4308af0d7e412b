use super::{database::Database, error::RepositoryError};
use crate::models::pokemon::Pokemon;
use crate::models::timestamps::{self, Timestamped};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct PokemonFilter {
    pub active: Option<bool>,
}

impl PokemonFilter {
    fn matches(&self, pokemon: &Pokemon) -> bool {
        self.active.map_or(true, |active| pokemon.active == active)
    }
}

pub fn get_pokemons(
    db: &Database,
    filter: PokemonFilter,
) -> Result<Vec<Pokemon>, RepositoryError> {
    let pokemons = db.read()?;
    Ok(pokemons
        .iter()
        .filter(|pokemon| filter.matches(pokemon))
        .cloned()
        .collect())
}

pub fn get_pokemon_by_id(
    db: &Database,
    pokemon_id: &str,
) -> Result<Option<Pokemon>, RepositoryError> {
    let pokemons = db.read()?;
    Ok(pokemons.iter().find(|p| p.id == pokemon_id).cloned())
}

pub fn create_pokemon(db: &Database, pokemon: Pokemon) -> Result<Pokemon, RepositoryError> {
    if let Err(errors) = pokemon.full_clean(&[]) {
        debug!(name = %pokemon, "rejected new pokemon: {errors}");
        return Err(errors.into());
    }
    let mut pokemon = Pokemon {
        id: uuid::Uuid::new_v4().to_string(),
        created_at: None,
        updated_at: None,
        ..pokemon
    };
    pokemon.on_create(timestamps::now());

    db.write()?.push(pokemon.clone());
    info!(id = %pokemon.id, name = %pokemon, kind = ?pokemon.pokemon_type(), "created pokemon");
    Ok(pokemon)
}

pub fn update_pokemon_by_id(
    db: &Database,
    pokemon_id: &str,
    changes: Pokemon,
) -> Result<Pokemon, RepositoryError> {
    let mut pokemons = db.write()?;
    let existing = pokemons
        .iter_mut()
        .find(|p| p.id == pokemon_id)
        .ok_or_else(|| RepositoryError::NotFound(pokemon_id.to_string()))?;

    let mut updated = existing.clone();
    updated.apply_changes(changes);
    if let Err(errors) = updated.full_clean(&[]) {
        debug!(id = pokemon_id, "rejected pokemon update: {errors}");
        return Err(errors.into());
    }
    updated.on_update(timestamps::now());

    *existing = updated.clone();
    info!(id = pokemon_id, name = %updated, kind = ?updated.pokemon_type(), "updated pokemon");
    Ok(updated)
}

pub fn delete_pokemon_by_id(
    db: &Database,
    pokemon_id: &str,
) -> Result<Option<usize>, RepositoryError> {
    let mut pokemons = db.write()?;
    let before = pokemons.len();
    pokemons.retain(|p| p.id != pokemon_id);
    let count = before - pokemons.len();
    if count == 0 {
        return Ok(None);
    }
    info!(id = pokemon_id, "deleted pokemon");
    Ok(Some(count))
}

#[cfg(test)]
mod tests {
    use super::{
        create_pokemon, delete_pokemon_by_id, get_pokemon_by_id, get_pokemons,
        update_pokemon_by_id, PokemonFilter,
    };
    use crate::models::pokemon::{Pokemon, PokemonType};
    use crate::repository::{database::Database, error::RepositoryError};
    use crate::utils::test_utils::init_test_pokemons;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_should_create_pokemon_with_id_and_timestamps() {
        let db = Database::new();
        let created = create_pokemon(&db, Pokemon::new("Bulbasaur", PokemonType::Grass, 90))
            .expect("valid pokemon");
        assert!(Uuid::parse_str(&created.id).is_ok());
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(
            get_pokemon_by_id(&db, &created.id).expect("readable store"),
            Some(created)
        );
    }

    #[test]
    fn test_should_ignore_caller_supplied_timestamps_on_create() {
        let db = Database::new();
        let stale = NaiveDate::from_ymd_opt(1999, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date");
        let pokemon = Pokemon {
            id: "not-a-uuid".to_string(),
            created_at: Some(stale),
            updated_at: Some(stale),
            ..Pokemon::new("Mawile", PokemonType::Steel, 100)
        };
        let created = create_pokemon(&db, pokemon).expect("valid pokemon");
        assert_ne!(created.id, "not-a-uuid");
        assert_ne!(created.created_at, Some(stale));
    }

    #[test]
    fn test_should_refuse_invalid_pokemon() {
        let db = Database::new();
        let result = create_pokemon(&db, Pokemon::new("Magikarp", PokemonType::Water, 20));
        match result {
            Err(RepositoryError::Validation(errors)) => {
                assert!(errors.errors().contains_key("hp"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(get_pokemons(&db, PokemonFilter::default())
            .expect("readable store")
            .is_empty());
    }

    #[test]
    fn test_should_filter_by_active() {
        let db = Database::new();
        let pokemons = init_test_pokemons(&db);
        let active =
            get_pokemons(&db, PokemonFilter { active: Some(true) }).expect("readable store");
        let inactive =
            get_pokemons(&db, PokemonFilter { active: Some(false) }).expect("readable store");
        let all = get_pokemons(&db, PokemonFilter::default()).expect("readable store");

        assert_eq!(all.len(), pokemons.len());
        assert_eq!(active.len() + inactive.len(), all.len());
        assert!(active.iter().all(|p| p.active));
        assert!(inactive.iter().all(|p| !p.active));
        assert_eq!(all, pokemons);
    }

    #[test]
    fn test_should_update_pokemon_and_keep_created_at() {
        let db = Database::new();
        let created = create_pokemon(&db, Pokemon::new("Ralts", PokemonType::Fairy, 80))
            .expect("valid pokemon");

        let mut changes = Pokemon::new("Kirlia", PokemonType::Fairy, 120);
        changes.created_at = None;
        let updated = update_pokemon_by_id(&db, &created.id, changes).expect("valid update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("Kirlia"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_should_keep_stored_pokemon_when_update_is_invalid() {
        let db = Database::new();
        let created = create_pokemon(&db, Pokemon::new("Shuppet", PokemonType::Ghost, 88))
            .expect("valid pokemon");

        let changes = Pokemon::new("Banette", PokemonType::Ghost, 999);
        let result = update_pokemon_by_id(&db, &created.id, changes);
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert_eq!(
            get_pokemon_by_id(&db, &created.id).expect("readable store"),
            Some(created)
        );
    }

    #[test]
    fn test_should_not_update_unknown_pokemon() {
        let db = Database::new();
        let changes = Pokemon::new("Lotad", PokemonType::Water, 80);
        let result = update_pokemon_by_id(&db, "missing", changes);
        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_should_delete_pokemon() {
        let db = Database::new();
        let pokemons = init_test_pokemons(&db);
        assert_eq!(
            delete_pokemon_by_id(&db, &pokemons[0].id).expect("writable store"),
            Some(1)
        );
        assert_eq!(
            delete_pokemon_by_id(&db, &pokemons[0].id).expect("writable store"),
            None
        );
        assert_eq!(
            get_pokemon_by_id(&db, &pokemons[0].id).expect("readable store"),
            None
        );
    }
}
