use super::pokemon_apis::{
    create_pokemon, delete_pokemon_by_id, get_admin_metadata, get_pokemon_by_id, get_pokemons,
    import_csv, update_pokemon_by_id,
};
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    // literal paths go before `/pokemon/{id}`
    cfg.service(
        web::scope("/admin")
            .service(get_admin_metadata)
            .service(import_csv)
            .service(get_pokemons)
            .service(create_pokemon)
            .service(get_pokemon_by_id)
            .service(update_pokemon_by_id)
            .service(delete_pokemon_by_id),
    );
}
