use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod admin;
mod api;
mod importer;
mod models;
mod repository;
mod settings;
mod utils;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[get("/health")]
async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse> {
    let response = Response {
        message: "Resource not found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

fn routes(cfg: &mut web::ServiceConfig) {
    api::config::config(cfg);
    cfg.service(healthcheck);
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> std::io::Result<()> {
    let settings = settings::Settings::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_admin=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = repository::database::Database::new();
    if let Some(path) = &settings.seed_csv {
        let report = importer::import_csv_file(&db, path)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
        tracing::info!(
            path = %path.display(),
            created = report.created.len(),
            failed = report.failed.len(),
            "seeded pokemon store"
        );
    }
    let app_data = web::Data::new(db);

    tracing::info!("Starting server on {}:{}", settings.host, settings.port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
