//! API transport: generic request dispatch and error classification

pub mod client;
pub mod errors;

pub use client::ApiClient;
pub use errors::{ApiError, ApiErrorCategory};
