use crate::admin::pokemon_admin::{ChangeForm, ChangeList, POKEMON_ADMIN};
use crate::importer;
use crate::models::fields::POKEMON_FIELDS;
use crate::models::pokemon::Pokemon;
use crate::repository::database::Database;
use crate::repository::error::RepositoryError;
use crate::repository::pokemon_repository::{self, PokemonFilter};
use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ChangeListQuery {
    pub active: Option<bool>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

fn error_response(err: RepositoryError) -> HttpResponse {
    match err {
        RepositoryError::Validation(errors) => HttpResponse::BadRequest().json(errors),
        RepositoryError::NotFound(_) => HttpResponse::NotFound().json("Pokemon not found"),
        err => {
            tracing::error!("{err}");
            HttpResponse::InternalServerError().json(err.to_string())
        }
    }
}

#[get("/pokemon/meta")]
pub async fn get_admin_metadata() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "admin": POKEMON_ADMIN,
        "fields": POKEMON_FIELDS,
    }))
}

#[get("/pokemon")]
pub async fn get_pokemons(
    db: web::Data<Database>,
    query: web::Query<ChangeListQuery>,
) -> HttpResponse {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    let filter = PokemonFilter {
        active: query.active,
    };
    match pokemon_repository::get_pokemons(&db, filter) {
        Ok(pokemons) => HttpResponse::Ok().json(ChangeList::build(
            &POKEMON_ADMIN,
            &pokemons,
            query.page.unwrap_or(1),
        )),
        Err(err) => error_response(err),
    }
}

#[post("/pokemon")]
pub async fn create_pokemon(
    db: web::Data<Database>,
    new_pokemon: web::Json<Pokemon>,
) -> HttpResponse {
    match pokemon_repository::create_pokemon(&db, new_pokemon.into_inner()) {
        Ok(pokemon) => HttpResponse::Created().json(pokemon),
        Err(err) => error_response(err),
    }
}

#[post("/pokemon/import")]
pub async fn import_csv(db: web::Data<Database>, mut payload: Multipart) -> HttpResponse {
    let mut body = Vec::new();
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(err) => return HttpResponse::BadRequest().json(err.to_string()),
        };
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => body.extend_from_slice(&bytes),
                Err(err) => return HttpResponse::BadRequest().json(err.to_string()),
            }
        }
    }
    match importer::import_csv(&db, body.as_slice()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(importer::ImportError::Header(err)) => {
            HttpResponse::BadRequest().json(err.to_string())
        }
        Err(err) => {
            tracing::error!("{err}");
            HttpResponse::InternalServerError().json(err.to_string())
        }
    }
}

#[get("/pokemon/{id}")]
pub async fn get_pokemon_by_id(db: web::Data<Database>, id: web::Path<String>) -> HttpResponse {
    if Uuid::parse_str(&id).is_err() {
        return HttpResponse::NotFound().json("Pokemon not found");
    }
    match pokemon_repository::get_pokemon_by_id(&db, &id) {
        Ok(Some(pokemon)) => {
            HttpResponse::Ok().json(ChangeForm::build(&POKEMON_ADMIN, &pokemon))
        }
        Ok(None) => HttpResponse::NotFound().json("Pokemon not found"),
        Err(err) => error_response(err),
    }
}

#[put("/pokemon/{id}")]
pub async fn update_pokemon_by_id(
    db: web::Data<Database>,
    id: web::Path<String>,
    changes: web::Json<Pokemon>,
) -> HttpResponse {
    if Uuid::parse_str(&id).is_err() {
        return HttpResponse::NotFound().json("Pokemon not found");
    }
    match pokemon_repository::update_pokemon_by_id(&db, &id, changes.into_inner()) {
        Ok(pokemon) => HttpResponse::Ok().json(pokemon),
        Err(err) => error_response(err),
    }
}

#[delete("/pokemon/{id}")]
pub async fn delete_pokemon_by_id(db: web::Data<Database>, id: web::Path<String>) -> HttpResponse {
    if Uuid::parse_str(&id).is_err() {
        return HttpResponse::NotFound().json("Pokemon not found");
    }
    match pokemon_repository::delete_pokemon_by_id(&db, &id) {
        Ok(Some(_)) => HttpResponse::NoContent().finish(),
        Ok(None) => HttpResponse::NotFound().json("Pokemon not found"),
        Err(err) => error_response(err),
    }
}
