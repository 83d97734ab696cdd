mod url_record;

pub use url_record::{RecordState, ShortenRequest, ShortenResponse, UrlRecord};
