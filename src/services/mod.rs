use std::sync::Arc;

use actix_web::web;

mod registry;

pub use registry::{UrlRegistry, UrlRegistryTrait};

use crate::{db::Database, repositories::SqliteUrlRecordRepository};

/// Registry backed by the SQLite store, as shared with handlers
pub type SqliteUrlRegistry = UrlRegistry<SqliteUrlRecordRepository>;

/// Builds the registry over `db`
pub fn build_registry(db: Database) -> SqliteUrlRegistry {
    let repository = SqliteUrlRecordRepository::new(db);
    UrlRegistry::new(Arc::new(repository))
}

/// Service Register
pub fn register(db: Database, cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(build_registry(db)));
}
