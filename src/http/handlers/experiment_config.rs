use crate::domain::attempt::TenantExperimentConfig;
use crate::providers::ExperimentConfigProvider;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct UpdateExperimentConfigRequest {
    pub experiment_traffic_pct: i32,
}

pub async fn get_experiment_config(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.experiment_config.traffic_percent(tenant_id).await {
        Ok(pct) => (
            axum::http::StatusCode::OK,
            Json(TenantExperimentConfig {
                tenant_id,
                experiment_traffic_pct: i32::from(pct),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("unable to load experiment config tenantId='{}': {:#}", tenant_id, e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

pub async fn upsert_experiment_config(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(req): Json<UpdateExperimentConfigRequest>,
) -> impl IntoResponse {
    if !(0..=100).contains(&req.experiment_traffic_pct) {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "experiment_traffic_pct must be within [0, 100]"})),
        )
            .into_response();
    }

    let config = TenantExperimentConfig {
        tenant_id,
        experiment_traffic_pct: req.experiment_traffic_pct,
    };
    match state.experiment_config.update(config).await {
        Ok(_) => {
            tracing::info!(
                "updated experiment config tenantId='{}' experimentTrafficPct='{}'",
                tenant_id,
                req.experiment_traffic_pct
            );
            (axum::http::StatusCode::OK, Json(serde_json::json!({"updated": true}))).into_response()
        }
        Err(e) => {
            tracing::error!("unable to update experiment config tenantId='{}': {:#}", tenant_id, e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
