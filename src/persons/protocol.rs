//! Registry Wire Protocol
//!
//! Defines the HTTP endpoints and the Data Transfer Objects (DTOs) the
//! service exchanges with its clients.
//!
//! Record bodies reuse [`super::types::Person`] directly; the structures
//! here cover the remaining response shapes.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: POST creates a record, GET lists all of them.
pub const ENDPOINT_ITEMS: &str = "/items/";
/// Record count endpoint.
pub const ENDPOINT_COUNT: &str = "/items/count";
/// Single-record endpoint (GET/PUT/DELETE), keyed by integer id.
pub const ENDPOINT_ITEM_BY_ID: &str = "/items/:id";

// --- Data Transfer Objects ---

/// Response for the count endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of records currently persisted.
    pub count: usize,
}

/// Acknowledgment returned by delete.
///
/// Delete is idempotent: the same acknowledgment is returned whether or not
/// a record with the requested id existed.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body attached to every client or server error status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable explanation of the rejection.
    pub error: String,
}
