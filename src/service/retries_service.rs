use crate::domain::attempt::{AttemptContext, DecisionResult, Outcome};
use crate::domain::billing::{last_failed_authorization, PaymentTransaction};
use crate::domain::decline::DeclineCode;
use crate::gate::retry_gate::RetryGate;
use crate::gate::stats::OutcomeCount;
use crate::providers::{ExperimentConfigProvider, PaymentMethodProvider, TransactionHistoryProvider};
use crate::rules::classifier::Classifier;
use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

/// Entry point for the retry orchestrator.
///
/// Looks up what happened to the previous authorization, classifies it and lets the
/// [`RetryGate`] decide. Every collaborator failure resolves to letting the retry through.
#[derive(Clone)]
pub struct RetriesService {
    pub classifier: Arc<Classifier>,
    pub gate: Arc<RetryGate>,
    pub history: Arc<dyn TransactionHistoryProvider>,
    pub payment_methods: Arc<dyn PaymentMethodProvider>,
    pub experiment_config: Arc<dyn ExperimentConfigProvider>,
}

impl RetriesService {
    pub async fn decide(&self, ctx: &AttemptContext) -> DecisionResult {
        let decline = match self
            .last_decline(ctx.account_id, ctx.payment_method_id, ctx.tenant_id)
            .await
        {
            Ok(Some(decline)) => decline,
            Ok(None) => return DecisionResult::ALLOW,
            Err(e) => {
                tracing::warn!(
                    "allowing retry attemptPaymentId='{}': unable to classify last authorization accountId='{}' paymentMethodId='{}': {:#}",
                    ctx.attempt_id,
                    ctx.account_id,
                    ctx.payment_method_id,
                    e
                );
                return DecisionResult::ALLOW;
            }
        };

        let traffic_pct = match self.experiment_config.traffic_percent(ctx.tenant_id).await {
            Ok(pct) => pct,
            Err(e) => {
                tracing::warn!(
                    "allowing retry attemptPaymentId='{}': unable to load experiment config tenantId='{}': {:#}",
                    ctx.attempt_id,
                    ctx.tenant_id,
                    e
                );
                return DecisionResult::ALLOW;
            }
        };

        self.gate.decide(ctx.attempt_id, Some(decline), traffic_pct)
    }

    /// Updated counts for the attempt's bucket, or `None` when the attempt was not awaiting an
    /// outcome.
    pub fn on_outcome(&self, attempt_id: Uuid, outcome: Outcome) -> Option<OutcomeCount> {
        self.gate.on_outcome(attempt_id, outcome)
    }

    /// Classification of the last authorization on this payment method, if it failed.
    pub async fn last_decline(
        &self,
        account_id: Uuid,
        payment_method_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<DeclineCode>> {
        let payments = self.history.account_payments(account_id, tenant_id).await?;
        match last_failed_authorization(&payments, payment_method_id) {
            Some(failed) => self.classify_transaction(failed, payment_method_id, tenant_id).await,
            None => Ok(None),
        }
    }

    /// What `decide` would classify if the payment identified by `payment_external_key` were
    /// retried now.
    pub async fn payment_method_check(
        &self,
        payment_external_key: &str,
        tenant_id: Uuid,
    ) -> Result<Option<DeclineCode>> {
        let Some(payment) = self
            .history
            .payment_by_external_key(payment_external_key, tenant_id)
            .await?
        else {
            return Ok(None);
        };

        let payment_method_id = payment.payment_method_id;
        match last_failed_authorization(std::slice::from_ref(&payment), payment_method_id) {
            Some(failed) => self.classify_transaction(failed, payment_method_id, tenant_id).await,
            None => Ok(None),
        }
    }

    async fn classify_transaction(
        &self,
        failed: &PaymentTransaction,
        payment_method_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<DeclineCode>> {
        // no plugin info: the plugin never reported a failure for it
        let Some(info) = &failed.plugin_info else {
            return Ok(None);
        };

        let Some(payment_method) = self
            .payment_methods
            .payment_method(payment_method_id, tenant_id)
            .await?
        else {
            tracing::warn!("payment method not found paymentMethodId='{}'", payment_method_id);
            return Ok(None);
        };

        let decline = self
            .classifier
            .classify_plugin_info(&payment_method.plugin_name, info);
        if let Some(d) = &decline {
            tracing::info!(
                "classified paymentTransactionId='{}' paymentTransactionExternalKey='{}' gatewayErrorCode='{}' gatewayErrorMsg='{}' processorMessage='{}' processorCode='{}' isRetryable='{}'",
                failed.transaction_id,
                failed.external_key,
                failed.gateway_error_code.as_deref().unwrap_or_default(),
                failed.gateway_error_msg.as_deref().unwrap_or_default(),
                d.message,
                d.code,
                d.retryable
            );
        }
        Ok(decline)
    }
}
