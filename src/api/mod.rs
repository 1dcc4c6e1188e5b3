//! HTTP API module for the Surcharge Engine.
//!
//! This module provides the REST API endpoints for classifying shift hours
//! into surcharge categories.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassifyRequest, ClassifyTimesRequest};
pub use response::{ApiError, RulesResponse};
pub use state::AppState;
