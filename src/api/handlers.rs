//! HTTP request handlers for the invoice ROI API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::compute_with;
use crate::error::RoiError;
use crate::models::{NewScenario, ScenarioId, ScenarioInputs};
use crate::report::ReportDocument;

use super::request::{ReportRequest, SaveScenarioRequest};
use super::response::{
    ApiError, ApiErrorResponse, DeleteResponse, ScenarioListResponse, ScenarioResponse,
    SimulationResponse,
};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/simulate", post(simulate_handler))
        .route("/scenarios", post(save_scenario_handler).get(list_scenarios_handler))
        .route(
            "/scenarios/:id",
            get(get_scenario_handler).delete(delete_scenario_handler),
        )
        .route("/report/generate", post(generate_report_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 response.
fn reject_payload(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Logs a failed operation and converts it into an error response.
///
/// Caller mistakes are logged as warnings; everything else is logged in full
/// as an error, while the caller only sees a generic message.
fn fail(correlation_id: Uuid, err: RoiError) -> ApiErrorResponse {
    if err.is_client_error() {
        warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    } else {
        error!(correlation_id = %correlation_id, error = %err, "Request failed");
    }
    err.into()
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /simulate.
///
/// Computes results for the posted inputs without storing anything.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioInputs>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let Json(inputs) = payload.map_err(|r| reject_payload(correlation_id, r))?;

    let start_time = Instant::now();
    let results = compute_with(&inputs, state.config().calculator());
    info!(
        correlation_id = %correlation_id,
        monthly_savings = results.monthly_savings,
        duration_us = start_time.elapsed().as_micros(),
        "Simulation completed successfully"
    );

    Ok(Json(SimulationResponse {
        success: true,
        inputs,
        results,
    })
    .into_response())
}

/// Handler for POST /scenarios.
///
/// Validates the name, computes the results and stores the scenario.
async fn save_scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveScenarioRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing save scenario request");

    let Json(request) = payload.map_err(|r| reject_payload(correlation_id, r))?;
    let scenario_name = request
        .validated_name()
        .map_err(|e| fail(correlation_id, e))?;

    let results = compute_with(&request.inputs, state.config().calculator());
    let scenario = state
        .store()
        .insert(NewScenario {
            scenario_name,
            inputs: request.inputs,
            results,
        })
        .map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        scenario_id = %scenario.id,
        "Scenario saved"
    );
    Ok((
        StatusCode::CREATED,
        Json(ScenarioResponse {
            success: true,
            scenario,
        }),
    )
        .into_response())
}

/// Handler for GET /scenarios.
async fn list_scenarios_handler(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let scenarios = state
        .store()
        .list(state.config().list_limit())
        .map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        count = scenarios.len(),
        "Listed scenarios"
    );
    Ok(Json(ScenarioListResponse {
        success: true,
        scenarios,
    })
    .into_response())
}

/// Handler for GET /scenarios/:id.
async fn get_scenario_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let scenario = ScenarioId::parse(&raw_id)
        .and_then(|id| state.store().get(&id))
        .map_err(|e| fail(correlation_id, e))?;

    Ok(Json(ScenarioResponse {
        success: true,
        scenario,
    })
    .into_response())
}

/// Handler for DELETE /scenarios/:id.
async fn delete_scenario_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    ScenarioId::parse(&raw_id)
        .and_then(|id| state.store().delete(&id))
        .map_err(|e| fail(correlation_id, e))?;

    info!(correlation_id = %correlation_id, scenario_id = %raw_id, "Scenario deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: "Scenario deleted".to_string(),
    })
    .into_response())
}

/// Handler for POST /report/generate.
///
/// Loads the scenario and returns the rendered report as a download.
async fn generate_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let Json(request) = payload.map_err(|r| reject_payload(correlation_id, r))?;
    let (raw_id, email) = request.validated().map_err(|e| fail(correlation_id, e))?;

    // A malformed id cannot name a stored scenario; report it as not found.
    let id = ScenarioId::parse(&raw_id).map_err(|e| {
        warn!(correlation_id = %correlation_id, error = %e, "Report requested for malformed id");
        ApiErrorResponse::from(RoiError::ScenarioNotFound { id: raw_id.clone() })
    })?;
    let scenario = state.store().get(&id).map_err(|e| fail(correlation_id, e))?;

    let document = ReportDocument::build(&scenario, &email, Utc::now(), state.config().report());
    let renderer = state.renderer();
    let bytes = renderer
        .render(&document)
        .map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        scenario_id = %scenario.id,
        size_bytes = bytes.len(),
        "Report generated"
    );
    let disposition = format!(
        "attachment; filename=\"roi-report-{}.{}\"",
        scenario.id,
        renderer.file_extension()
    );
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, renderer.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
