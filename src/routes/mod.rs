use std::collections::BTreeMap;

use actix_web::{error::JsonPayloadError, web, HttpResponse, Responder};

use crate::db::DBHealthStatus;
use crate::errors::AppError;
use crate::handlers::{redirect_handler, shorten_handler};
use crate::types::{AppState, HealthStatus, ServiceInfo};

// Handler function for the root route "/"
async fn index() -> impl Responder {
    let endpoints = BTreeMap::from([
        ("POST /shorten".to_string(), "Shorten a long URL".to_string()),
        (
            "GET /{short_code}".to_string(),
            "Redirect to original URL".to_string(),
        ),
    ]);

    HttpResponse::Ok().json(ServiceInfo {
        message: String::from("URL Shortener API"),
        endpoints,
    })
}

// Handler function for the health check endpoint
async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let uptime = data.start_time.elapsed().as_secs();
    let db_health = data.db.health_check().await;

    let healthy = db_health.status == DBHealthStatus::Healthy;
    let status = HealthStatus {
        status: String::from(if healthy { "OK" } else { "DEGRADED" }),
        version: data.version.clone(),
        db_health: Some(db_health),
        uptime_seconds: uptime,
    };

    if healthy {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::ServiceUnavailable().json(status)
    }
}

const JSON_LIMIT: usize = 32 * 1024;

/// Malformed or missing JSON bodies are client errors with the standard error body
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                AppError::PayloadTooLarge(err.to_string()).into()
            }
            _ => AppError::Validation(err.to_string()).into(),
        })
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.route("/", web::get().to(index));
    cfg.route("/health", web::get().to(health_check));
    cfg.route("/shorten", web::post().to(shorten_handler));
    // Catch-all for codes, registered last
    cfg.route("/{short_code}", web::get().to(redirect_handler));
}
