//! Service layer for salesdash
//!
//! Loading and validating uploads. The analyses themselves live in
//! `reports`.

pub mod loader;
pub mod schema;

pub use loader::{decode_latin1, is_missing_token, DatasetLoader, LoadOptions};
