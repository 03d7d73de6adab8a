pub mod models;
pub mod routes;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer};
use log::info;

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🚀 Starting ML scoring API");

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let workers = std::env::var("WORKERS")
        .map(|value| value.parse().unwrap_or(num_cpus::get()))
        .unwrap_or_else(|_| num_cpus::get());

    let bind_address = format!("{}:{}", host, port);

    info!("🌐 Server listening on: http://{}", bind_address);
    info!("👷 Workers: {}", workers);
    info!("🔧 Endpoints:");
    info!("   GET  /health - liveness check");
    info!("   POST /score  - score a feature payload");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors())
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
