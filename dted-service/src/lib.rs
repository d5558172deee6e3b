//! DTED Service Library
//!
//! HTTP handlers and types for the DTED elevation service.
//! This library is used by both the dted-service binary and integration tests.

pub mod handlers;

use dted::Terrain;

/// Application state shared across handlers.
pub struct AppState {
    /// Terrain engine for altitude queries.
    pub terrain: Terrain,
}

// Re-export commonly used types for convenience
pub use handlers::{
    AltitudeQuery, AltitudeResponse, ErrorResponse, HealthResponse, InterpolatedAltitudeResponse,
    StatsResponse,
};
