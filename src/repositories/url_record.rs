// src/repositories/url_record.rs - Data access
use async_trait::async_trait;
use log::{debug, error};
use sqlx::SqlitePool;

use crate::db::Database;
use crate::errors::RepositoryError;
use crate::models::UrlRecord;

type Result<T> = std::result::Result<T, RepositoryError>;

const FIND_BY_LONG_URL: &str =
    "SELECT id, long_url, short_code, created_at FROM urls WHERE long_url = ?1";
const FIND_BY_SHORT_CODE: &str =
    "SELECT id, long_url, short_code, created_at FROM urls WHERE short_code = ?1";

/// Storage handle the registry is built on: insert, single-field update and
/// single-field lookups over the `urls` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRecordRepositoryTrait: Send + Sync {
    /// Inserts a pending record (no short code) for `long_url`
    ///
    /// ### Returns
    /// * `Result<Option<i64>>` - The identifier the store assigned, `None` if it produced none
    ///
    /// ### Errors
    /// * `RepositoryError::Conflict` - A record for this exact URL already exists
    /// * `RepositoryError::Database` - If a database error occurs
    async fn insert_pending(&self, long_url: &str) -> Result<Option<i64>>;

    /// Writes the short code of record `id`
    ///
    /// ### Returns
    /// * `Result<u64>` - Number of rows affected
    ///
    /// ### Errors
    /// * `RepositoryError::Conflict` - The code is already held by another record
    /// * `RepositoryError::Database` - If a database error occurs
    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<u64>;

    /// Finds the record whose `long_url` equals the input exactly
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>>;

    /// Finds the record whose `short_code` equals the input exactly (case-sensitive)
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>>;
}

// Implementation using actual database
pub struct SqliteUrlRecordRepository {
    pool: SqlitePool,
}

impl SqliteUrlRecordRepository {
    pub fn new(db: Database) -> Self {
        Self {
            pool: db.get_pool().clone(),
        }
    }
}

#[async_trait]
impl UrlRecordRepositoryTrait for SqliteUrlRecordRepository {
    async fn insert_pending(&self, long_url: &str) -> Result<Option<i64>> {
        let id: Option<i64> =
            sqlx::query_scalar("INSERT INTO urls (long_url) VALUES (?1) RETURNING id")
                .bind(long_url)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    let err = RepositoryError::from(e);
                    if !matches!(err, RepositoryError::Conflict(_)) {
                        error!("Failed to insert URL record: {}", err);
                    }
                    err
                })?;

        debug!("Inserted pending record {:?} for {}", id, long_url);
        Ok(id)
    }

    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE urls SET short_code = ?1 WHERE id = ?2")
            .bind(short_code)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to set short code for record {}: {}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>> {
        sqlx::query_as::<_, UrlRecord>(FIND_BY_LONG_URL)
            .bind(long_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::Database)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>> {
        sqlx::query_as::<_, UrlRecord>(FIND_BY_SHORT_CODE)
            .bind(short_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::Database)
    }
}
