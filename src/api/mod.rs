//! HTTP API module for the Setoran Engine.
//!
//! This module provides the REST endpoints for recording, previewing and
//! correcting attendant shift reports.

mod cors;
mod handlers;
mod request;
mod response;
mod state;

pub use cors::{cors_layer, origin_matches};
pub use handlers::create_router;
pub use request::{CalculationRequest, ListParams, SetoranCreateRequest, SetoranUpdateRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
