//! HTTP API module for the Nightly Charge Engine.
//!
//! This module provides the REST API endpoint for calculating the charge
//! of a single babysitting session.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RateOverrides};
pub use response::{ApiError, ApiErrorResponse, ChargeResponse};
pub use state::AppState;
