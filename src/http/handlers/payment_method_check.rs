use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PaymentMethodCheckQuery {
    pub payment_external_key: String,
    pub tenant_id: Uuid,
}

pub async fn payment_method_check(
    State(state): State<AppState>,
    Query(query): Query<PaymentMethodCheckQuery>,
) -> impl IntoResponse {
    match state
        .retries_service
        .payment_method_check(&query.payment_external_key, query.tenant_id)
        .await
    {
        Ok(Some(decline)) => (axum::http::StatusCode::OK, Json(decline)).into_response(),
        Ok(None) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "no failed authorization to classify"})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                "payment method check failed paymentExternalKey='{}' tenantId='{}': {:#}",
                query.payment_external_key,
                query.tenant_id,
                e
            );
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
