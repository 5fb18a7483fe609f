//! HTTP request handlers for the Setoran Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::preview_with_unit_price;
use crate::error::EngineError;
use crate::models::{ShiftInput, ShiftPatch};
use crate::validation::validate_input_with_unit_price;

use super::cors::cors_layer;
use super::request::{CalculationRequest, ListParams, SetoranCreateRequest, SetoranUpdateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().server().allowed_origins);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/setoran", post(create_handler).get(list_handler))
        .route("/api/setoran/calculate", post(calculate_handler))
        .route(
            "/api/setoran/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /.
async fn root_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let server = state.config().server();
    Json(json!({
        "message": server.title,
        "version": server.version,
        "description": server.description,
        "health": "/health"
    }))
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "API is running properly"
    }))
}

/// Handler for POST /api/setoran.
///
/// Validates the report, calculates its totals and stores it.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<SetoranCreateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create setoran request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.store().create(request.into()).await {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = record.id,
                net_total = %record.totals.net_total,
                "Setoran created"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /api/setoran.
async fn list_handler(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let records = state.store().list(params.skip, params.limit).await;
    Json(records).into_response()
}

/// Handler for GET /api/setoran/:id.
async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(rejection),
    };

    match state.store().get(id).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for PUT /api/setoran/:id.
///
/// Applies a partial update. Totals are recalculated only when a financial
/// field is part of the update.
async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<SetoranUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing update setoran request");

    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(rejection),
    };
    let patch: ShiftPatch = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.store().update(id, &patch).await {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = id,
                recalculated = patch.touches_financials(),
                "Setoran updated"
            );
            Json(record).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for DELETE /api/setoran/:id.
async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(rejection),
    };

    match state.store().delete(id).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, record_id = id, "Setoran deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /api/setoran/calculate.
///
/// Previews the totals for a report without storing anything.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation preview");

    let input: ShiftInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let unit_price = state.config().unit_price();
    if let Err(err) = validate_input_with_unit_price(&input, unit_price) {
        return engine_error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let totals = preview_with_unit_price(&input, unit_price);
    info!(
        correlation_id = %correlation_id,
        net_total = %totals.net_total,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation preview completed"
    );

    Json(totals).into_response()
}

/// Converts a JSON body rejection into an API error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    ApiErrorResponse::bad_request(error).into_response()
}

/// Converts a path rejection (e.g. a non-numeric ID) into an API error response.
fn path_rejection_response(rejection: PathRejection) -> Response {
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
        .into_response()
}

/// Logs an engine error and converts it into an API error response.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Setoran request failed"
    );
    ApiErrorResponse::from(err).into_response()
}
