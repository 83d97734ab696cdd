use actix_web::{http::header::LOCATION, web, HttpResponse, Responder};
use log::{debug, info};

use crate::{
    config::Config,
    models::{ShortenRequest, ShortenResponse},
    services::{SqliteUrlRegistry, UrlRegistryTrait},
    types::Result,
};

/// Shorten URL route handler
pub async fn shorten_handler(
    body: web::Json<ShortenRequest>,
    registry: web::Data<SqliteUrlRegistry>,
    config: web::Data<Config>,
) -> Result<impl Responder> {
    let ShortenRequest { long_url } = body.into_inner();
    debug!("Shorten requested for: {}", long_url);

    let short_code = registry.register(&long_url).await?;

    Ok(HttpResponse::Ok().json(ShortenResponse {
        short_url: config.shortener.short_url(&short_code),
    }))
}

/// Redirect route handler
pub async fn redirect_handler(
    path: web::Path<String>,
    registry: web::Data<SqliteUrlRegistry>,
) -> Result<impl Responder> {
    let short_code = path.into_inner();
    debug!("Redirect requested for code: {}", short_code);

    let long_url = registry.resolve(&short_code).await?;

    info!("Redirecting '{}' to '{}'", short_code, long_url);

    Ok(HttpResponse::TemporaryRedirect()
        .insert_header((LOCATION, long_url))
        .finish())
}
