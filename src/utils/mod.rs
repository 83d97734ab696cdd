pub mod base62;
pub mod id_generator;

pub use base62::{decode_base62, encode_base62};
pub use id_generator::short_code_for_id;
