//! API Handlers
//!
//! HTTP request handlers for each calculator endpoint.

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::calculator::Calculator;
use crate::error::{ApiError, Result};
use crate::models::{CalcQuery, CalcResponse, HealthResponse, StatsResponse};
use crate::operations::OperationRegistry;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached arithmetic service
    pub calculator: Calculator,
}

impl AppState {
    /// Creates a new AppState around the given calculator.
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Creates a new AppState serving add, subtract, multiply and divide.
    pub fn standard() -> Self {
        Self::new(Calculator::new(OperationRegistry::standard()))
    }
}

/// Handler for GET /:operation?x=..&y=..
///
/// Argument errors are reported in the body with status 200. Only an
/// unregistered operation name is rejected with 404. The query is taken as
/// raw pairs so a repeated operand cannot fail extraction.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CalcResponse>> {
    if !state.calculator.registry().contains(&operation) {
        return Err(ApiError::UnknownOperation(operation));
    }

    let query = CalcQuery::from_pairs(pairs);

    let response = state
        .calculator
        .handle(&operation, query.x_text(), query.y_text(), Instant::now())
        .await;

    info!(
        action = %response.action,
        cached = response.cached,
        error = %response.error,
        "served arithmetic request"
    );

    Ok(Json(response))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.calculator.stats(Instant::now()).await;

    Json(StatsResponse::from(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
