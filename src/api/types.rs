//! API request and response types.
//!
//! Todo payloads reuse the domain types directly; only the service-level
//! responses live here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of todo items currently held.
    pub todos: usize,
    /// Timestamp.
    pub timestamp: String,
}
