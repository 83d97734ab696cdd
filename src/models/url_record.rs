// src/models/url_record.rs - Pure data structures
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Body of a `POST /shorten` request
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Body of a successful `POST /shorten` response
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// A row of the `urls` table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct UrlRecord {
    /// Store-assigned identifier, the sole input to the short code
    pub id: i64,

    /// The original URL exactly as submitted
    pub long_url: String,

    /// Unset only while the record is pending
    pub short_code: Option<String>,

    pub created_at: NaiveDateTime,
}

/// Lifecycle of a record inside a single registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Row inserted, short code not written yet
    Pending,
    /// Short code written; the record is read-only from here on
    Complete,
}

impl UrlRecord {
    pub fn state(&self) -> RecordState {
        match self.short_code {
            Some(_) => RecordState::Complete,
            None => RecordState::Pending,
        }
    }
}
