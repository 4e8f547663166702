use crate::gate::retry_gate::GateSummary;
use crate::gate::stats::OutcomeCount;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub gate: GateSummary,
    pub outcomes: BTreeMap<String, BTreeMap<i32, OutcomeCount>>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let gate = &state.retries_service.gate;
    let resp = StatsResponse {
        gate: gate.summary(),
        outcomes: gate.stats().snapshot(),
        generated_at: chrono::Utc::now(),
    };
    (axum::http::StatusCode::OK, Json(resp)).into_response()
}
