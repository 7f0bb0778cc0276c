//! HTTP API module for the invoice ROI service.
//!
//! This module provides the REST endpoints for simulating ROI, managing
//! saved scenarios and generating scenario reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReportRequest, SaveScenarioRequest};
pub use response::{
    ApiError, ApiErrorResponse, DeleteResponse, GENERIC_ERROR_MESSAGE, ScenarioListResponse,
    ScenarioResponse, SimulationResponse,
};
pub use state::AppState;
