pub mod asset;
pub mod commands;
pub mod download;
pub mod error;
pub mod github;
pub mod http;
pub mod release;
pub mod runtime;

pub use error::FetchError;
