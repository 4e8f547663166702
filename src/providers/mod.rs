use crate::domain::attempt::TenantExperimentConfig;
use crate::domain::billing::{Payment, PaymentMethodRecord};
use anyhow::Result;
use uuid::Uuid;

pub mod memory;

#[async_trait::async_trait]
pub trait TransactionHistoryProvider: Send + Sync {
    /// All payments of the account, oldest first.
    async fn account_payments(&self, account_id: Uuid, tenant_id: Uuid) -> Result<Vec<Payment>>;

    async fn payment_by_external_key(
        &self,
        payment_external_key: &str,
        tenant_id: Uuid,
    ) -> Result<Option<Payment>>;
}

#[async_trait::async_trait]
pub trait PaymentMethodProvider: Send + Sync {
    async fn payment_method(
        &self,
        payment_method_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<PaymentMethodRecord>>;
}

#[async_trait::async_trait]
pub trait ExperimentConfigProvider: Send + Sync {
    /// Share of classified retries, in `[0, 100]`, on which the verdict is enforced.
    async fn traffic_percent(&self, tenant_id: Uuid) -> Result<u8>;
}

/// Durable per-tenant experiment settings behind the traffic-percentage cache.
#[async_trait::async_trait]
pub trait ExperimentConfigStore: Send + Sync {
    async fn get_for_tenant(&self, tenant_id: Uuid) -> Result<Option<TenantExperimentConfig>>;

    async fn upsert(&self, config: TenantExperimentConfig) -> Result<()>;
}
