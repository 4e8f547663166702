use crate::domain::attempt::TenantExperimentConfig;
use crate::domain::billing::{Payment, PaymentMethodRecord};
use crate::providers::{
    ExperimentConfigProvider, ExperimentConfigStore, PaymentMethodProvider, TransactionHistoryProvider,
};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// In-process billing data, used by tests and local runs without a database.
///
/// `set_unavailable(true)` makes every lookup fail, standing in for an unreachable billing system.
#[derive(Debug, Default)]
pub struct InMemoryBilling {
    payments: RwLock<Vec<Payment>>,
    payment_methods: RwLock<HashMap<Uuid, PaymentMethodRecord>>,
    unavailable: RwLock<bool>,
}

impl InMemoryBilling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_payment(&self, payment: Payment) {
        self.payments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payment);
    }

    pub fn add_payment_method(&self, payment_method_id: Uuid, plugin_name: &str) {
        self.payment_methods
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                payment_method_id,
                PaymentMethodRecord {
                    payment_method_id,
                    plugin_name: plugin_name.to_string(),
                },
            );
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().unwrap_or_else(PoisonError::into_inner) = unavailable;
    }

    fn check_available(&self) -> Result<()> {
        if *self.unavailable.read().unwrap_or_else(PoisonError::into_inner) {
            return Err(anyhow!("billing system unavailable"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionHistoryProvider for InMemoryBilling {
    async fn account_payments(&self, account_id: Uuid, _tenant_id: Uuid) -> Result<Vec<Payment>> {
        self.check_available()?;
        Ok(self
            .payments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|p| p.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn payment_by_external_key(
        &self,
        payment_external_key: &str,
        _tenant_id: Uuid,
    ) -> Result<Option<Payment>> {
        self.check_available()?;
        Ok(self
            .payments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.external_key == payment_external_key)
            .cloned())
    }
}

#[async_trait::async_trait]
impl PaymentMethodProvider for InMemoryBilling {
    async fn payment_method(
        &self,
        payment_method_id: Uuid,
        _tenant_id: Uuid,
    ) -> Result<Option<PaymentMethodRecord>> {
        self.check_available()?;
        Ok(self
            .payment_methods
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&payment_method_id)
            .cloned())
    }
}

/// Per-tenant traffic percentages with a fallback for unknown tenants.
#[derive(Debug, Default)]
pub struct StaticExperimentConfig {
    default_pct: u8,
    per_tenant: RwLock<HashMap<Uuid, u8>>,
}

impl StaticExperimentConfig {
    pub fn new(default_pct: u8) -> Self {
        Self {
            default_pct: default_pct.min(100),
            per_tenant: RwLock::new(HashMap::new()),
        }
    }

    pub fn set(&self, tenant_id: Uuid, traffic_pct: u8) {
        self.per_tenant
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tenant_id, traffic_pct.min(100));
    }
}

#[async_trait::async_trait]
impl ExperimentConfigProvider for StaticExperimentConfig {
    async fn traffic_percent(&self, tenant_id: Uuid) -> Result<u8> {
        Ok(self
            .per_tenant
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tenant_id)
            .copied()
            .unwrap_or(self.default_pct))
    }
}

/// Stores experiment rows as given, without clamping, and counts reads.
#[derive(Debug, Default)]
pub struct InMemoryExperimentConfigStore {
    rows: RwLock<HashMap<Uuid, TenantExperimentConfig>>,
    loads: AtomicU64,
}

impl InMemoryExperimentConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::Acquire)
    }
}

#[async_trait::async_trait]
impl ExperimentConfigStore for InMemoryExperimentConfigStore {
    async fn get_for_tenant(&self, tenant_id: Uuid) -> Result<Option<TenantExperimentConfig>> {
        self.loads.fetch_add(1, Ordering::AcqRel);
        Ok(self
            .rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tenant_id)
            .cloned())
    }

    async fn upsert(&self, config: TenantExperimentConfig) -> Result<()> {
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(config.tenant_id, config);
        Ok(())
    }
}
