use crate::domain::decline::ErrorCategory;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DeclineCodesQuery {
    pub retryable: Option<String>,
    pub category: Option<String>,
}

/// Anything but a case-insensitive `true` reads as `false`.
pub fn parse_retryable(v: Option<&str>) -> bool {
    v.is_some_and(|s| s.trim().eq_ignore_ascii_case("true"))
}

pub async fn list_decline_codes(
    State(state): State<AppState>,
    Query(query): Query<DeclineCodesQuery>,
) -> impl IntoResponse {
    let category = match query.category.as_deref() {
        None => None,
        Some(name) => match ErrorCategory::from_name(name) {
            Some(c) => Some(c),
            None => {
                return (
                    axum::http::StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error": format!("unknown category '{}'", name)})),
                )
                    .into_response()
            }
        },
    };

    let retryable = parse_retryable(query.retryable.as_deref());
    let table = state
        .retries_service
        .classifier
        .table()
        .filtered(retryable, category);
    (axum::http::StatusCode::OK, Json(table)).into_response()
}
