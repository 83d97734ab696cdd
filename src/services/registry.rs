// src/services/registry.rs - Business logic
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::errors::{RegistryError, RepositoryError};
use crate::models::{RecordState, UrlRecord};
use crate::repositories::UrlRecordRepositoryTrait;
use crate::utils::id_generator;
use crate::validations::validate_url;

type Result<T> = std::result::Result<T, RegistryError>;

#[async_trait]
pub trait UrlRegistryTrait {
    /// Issues the short code for `long_url`, reusing the existing one when the
    /// exact same string was registered before.
    async fn register(&self, long_url: &str) -> Result<String>;

    /// Returns the long URL stored for `short_code`.
    async fn resolve(&self, short_code: &str) -> Result<String>;
}

pub struct UrlRegistry<T: UrlRecordRepositoryTrait> {
    repository: Arc<T>,
}

impl<T: UrlRecordRepositoryTrait> UrlRegistry<T> {
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }

    /// Short code of an existing record. A pending record left behind by an
    /// interrupted or concurrent registration is completed in place; the code
    /// depends only on the id, so every writer stores the same value.
    async fn code_of(&self, record: UrlRecord) -> Result<String> {
        match (record.state(), record.short_code) {
            (RecordState::Complete, Some(short_code)) => Ok(short_code),
            _ => {
                debug!("Completing pending record {}", record.id);
                self.assign_code(record.id).await
            }
        }
    }

    /// Derives the code from `id` and stores it on the record
    async fn assign_code(&self, id: i64) -> Result<String> {
        let short_code = id_generator::short_code_for_id(id).ok_or_else(|| {
            RegistryError::Allocation(format!("Store assigned unusable identifier {}", id))
        })?;

        let affected = self.repository.set_short_code(id, &short_code).await?;
        if affected == 0 {
            return Err(RegistryError::Storage(RepositoryError::NotFound(format!(
                "URL record {} disappeared before its short code was stored",
                id
            ))));
        }

        Ok(short_code)
    }

    /// Lost an insert race: the other registration owns the row now
    async fn reread_after_conflict(&self, long_url: &str) -> Result<String> {
        match self.repository.find_by_long_url(long_url).await? {
            Some(record) => self.code_of(record).await,
            None => Err(RegistryError::Storage(RepositoryError::Conflict(format!(
                "Insert for '{}' conflicted but no record was found",
                long_url
            )))),
        }
    }
}

#[async_trait]
impl<T: UrlRecordRepositoryTrait + Send + Sync> UrlRegistryTrait for UrlRegistry<T> {
    async fn register(&self, long_url: &str) -> Result<String> {
        validate_url(long_url)?;

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            debug!("Dedup hit for {} (record {})", long_url, existing.id);
            return self.code_of(existing).await;
        }

        let id = match self.repository.insert_pending(long_url).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                return Err(RegistryError::Allocation(
                    "Store returned no identifier for the new record".to_string(),
                ))
            }
            Err(RepositoryError::Conflict(_)) => {
                warn!("Concurrent registration of {}, reusing its record", long_url);
                return self.reread_after_conflict(long_url).await;
            }
            Err(e) => return Err(e.into()),
        };

        let short_code = self.assign_code(id).await?;
        info!("Issued short code '{}' for record {}", short_code, id);

        Ok(short_code)
    }

    async fn resolve(&self, short_code: &str) -> Result<String> {
        match self.repository.find_by_short_code(short_code).await? {
            Some(record) => Ok(record.long_url),
            None => Err(RegistryError::NotFound(format!(
                "Short URL not found: {}",
                short_code
            ))),
        }
    }
}
