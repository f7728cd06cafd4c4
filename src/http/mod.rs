//! HTTP client module with status checking and streaming downloads.

mod client;
mod status;

pub use client::{ACCEPT_OCTET_STREAM, ACCEPT_RAW_JSON, HttpClient};
