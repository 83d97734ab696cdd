mod url_record;

#[cfg(test)]
pub use url_record::MockUrlRecordRepositoryTrait;
pub use url_record::{SqliteUrlRecordRepository, UrlRecordRepositoryTrait};
