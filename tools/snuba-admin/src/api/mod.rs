//! API client module for the Snuba admin HTTP endpoints.
//!
//! Plain JSON over GET: `configs` and `clickhouse_queries`.

mod client;
mod types;

pub use client::{AdminApiClient, ApiError};
pub use types::*;
