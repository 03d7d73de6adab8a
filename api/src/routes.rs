use std::time::Instant;

use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};

use crate::models::{ErrorKind, ErrorResponse, HealthResponse, ScoreRequest, ScoreResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/score", web::post().to(score))
        .default_service(web::route().to(not_found));
}

// Payload-layer failures (malformed JSON, non-object body, oversized body)
// surface as the same JSON error shape the handlers produce.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(10 * 1024 * 1024)
        .error_handler(|err, _req| {
            let body = ErrorResponse::new(ErrorKind::InvalidBody, err.to_string());
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(body),
            )
            .into()
        })
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}

async fn score(request: web::Json<ScoreRequest>) -> impl Responder {
    let start = Instant::now();

    match request.into_inner().into_features() {
        Some(features) => {
            info!("score request served in {:?}", start.elapsed());
            HttpResponse::Ok().json(ScoreResponse { score: features })
        }
        None => {
            warn!("score request rejected, no \"X\" key in body");
            HttpResponse::BadRequest().json(ErrorResponse::new(
                ErrorKind::MissingField,
                "request body must contain key \"X\"",
            ))
        }
    }
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::new(ErrorKind::NotFound, "endpoint not found"))
}
