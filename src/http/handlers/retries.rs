use crate::domain::attempt::{AttemptContext, Outcome};
use crate::service::retries_service::RetriesService;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct OutcomeRequest {
    pub outcome: Outcome,
}

/// Called by the payment orchestrator before it retries an authorization.
pub async fn decide_retry(
    State(service): State<RetriesService>,
    Json(ctx): Json<AttemptContext>,
) -> impl IntoResponse {
    let decision = service.decide(&ctx).await;
    (axum::http::StatusCode::OK, Json(decision)).into_response()
}

pub async fn record_outcome(
    State(service): State<RetriesService>,
    Path(attempt_id): Path<Uuid>,
    Json(req): Json<OutcomeRequest>,
) -> impl IntoResponse {
    let body = match service.on_outcome(attempt_id, req.outcome) {
        Some(count) => serde_json::json!({
            "attempt_id": attempt_id,
            "scored": true,
            "succeeded": count.succeeded,
            "failed": count.failed
        }),
        None => serde_json::json!({"attempt_id": attempt_id, "scored": false}),
    };
    (axum::http::StatusCode::OK, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attempt::DecisionResult;
    use crate::domain::billing::{
        Payment, PaymentTransaction, TransactionPluginInfo, TransactionStatus, TransactionType,
    };
    use crate::gate::retry_gate::{FixedDraw, RetryGate};
    use crate::gate::stats::OutcomeStats;
    use crate::providers::memory::{InMemoryBilling, StaticExperimentConfig};
    use crate::rules::classifier::Classifier;
    use crate::rules::decline_table::BRAINTREE_BLUE_PLUGIN;
    use std::sync::Arc;

    fn service(draw: u8, traffic_pct: u8) -> (RetriesService, AttemptContext) {
        let billing = Arc::new(InMemoryBilling::new());
        let ctx = AttemptContext {
            attempt_id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            payment_method_id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
        };
        billing.add_payment_method(ctx.payment_method_id, BRAINTREE_BLUE_PLUGIN);
        let tx_id = Uuid::new_v4();
        billing.add_payment(Payment {
            payment_id: Uuid::new_v4(),
            external_key: "pay-1".to_string(),
            account_id: ctx.account_id,
            payment_method_id: ctx.payment_method_id,
            auth_amount_minor: None,
            is_auth_voided: false,
            transactions: vec![PaymentTransaction {
                transaction_id: tx_id,
                external_key: tx_id.to_string(),
                transaction_type: TransactionType::Authorize,
                status: TransactionStatus::PaymentFailure,
                gateway_error_code: Some("2004".to_string()),
                gateway_error_msg: Some("Expired Card".to_string()),
                plugin_info: Some(TransactionPluginInfo {
                    gateway_error_code: Some("2004".to_string()),
                    gateway_error: Some("Expired Card".to_string()),
                    properties: Default::default(),
                }),
            }],
        });

        let service = RetriesService {
            classifier: Arc::new(Classifier::default()),
            gate: Arc::new(RetryGate::with_draw(Arc::new(OutcomeStats::new()), FixedDraw(draw))),
            history: billing.clone(),
            payment_methods: billing,
            experiment_config: Arc::new(StaticExperimentConfig::new(traffic_pct)),
        };
        (service, ctx)
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn decide_route_aborts_in_treatment() {
        let (service, ctx) = service(0, 100);
        let resp = decide_retry(State(service.clone()), Json(ctx))
            .await
            .into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::OK);

        let decision: DecisionResult = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(decision, DecisionResult::ABORT);
        assert_eq!(service.gate.summary().attempted, 1);
        assert_eq!(service.gate.summary().aborted, 1);
    }

    #[tokio::test]
    async fn outcome_route_scores_control_attempt_once() {
        let (service, ctx) = service(99, 0);
        let attempt_id = ctx.attempt_id;
        decide_retry(State(service.clone()), Json(ctx)).await;
        assert_eq!(service.gate.summary().pending, 1);

        let resp = record_outcome(
            State(service.clone()),
            Path(attempt_id),
            Json(OutcomeRequest { outcome: Outcome::Success }),
        )
        .await
        .into_response();
        let body = body_json(resp).await;
        assert_eq!(body["scored"], true);
        assert_eq!(body["succeeded"], 1);
        assert_eq!(service.gate.summary().pending, 0);

        let again = record_outcome(
            State(service.clone()),
            Path(attempt_id),
            Json(OutcomeRequest { outcome: Outcome::Success }),
        )
        .await
        .into_response();
        assert_eq!(body_json(again).await["scored"], false);
        assert_eq!(service.gate.stats().total_retries("Braintree", 2004), 1);
    }

    #[test]
    fn outcome_body_uses_screaming_case() {
        let req: OutcomeRequest = serde_json::from_str(r#"{"outcome":"FAILURE"}"#).unwrap();
        assert_eq!(req.outcome, Outcome::Failure);
    }
}
