use crate::domain::attempt::TenantExperimentConfig;
use crate::providers::{ExperimentConfigProvider, ExperimentConfigStore};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Caches per-tenant experiment traffic percentages; edits made elsewhere become visible once
/// `ttl` elapses, edits made through [`ExperimentConfigCache::update`] immediately.
#[derive(Clone)]
pub struct ExperimentConfigCache {
    store: Arc<dyn ExperimentConfigStore>,
    inner: Arc<RwLock<HashMap<Uuid, (std::time::Instant, u8)>>>,
    ttl: std::time::Duration,
    default_pct: u8,
}

impl ExperimentConfigCache {
    pub fn new(store: Arc<dyn ExperimentConfigStore>, ttl: std::time::Duration, default_pct: u8) -> Self {
        Self {
            store,
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            default_pct: default_pct.min(100),
        }
    }

    pub async fn invalidate(&self, tenant_id: Uuid) {
        self.inner.write().await.remove(&tenant_id);
    }

    pub async fn update(&self, config: TenantExperimentConfig) -> Result<()> {
        let tenant_id = config.tenant_id;
        self.store.upsert(config).await?;
        self.invalidate(tenant_id).await;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExperimentConfigProvider for ExperimentConfigCache {
    async fn traffic_percent(&self, tenant_id: Uuid) -> Result<u8> {
        {
            let read = self.inner.read().await;
            if let Some((loaded_at, pct)) = read.get(&tenant_id) {
                if loaded_at.elapsed() <= self.ttl {
                    return Ok(*pct);
                }
            }
        }

        let pct = match self.store.get_for_tenant(tenant_id).await? {
            Some(config) => config.experiment_traffic_pct.clamp(0, 100) as u8,
            None => self.default_pct,
        };
        let mut write = self.inner.write().await;
        write.insert(tenant_id, (std::time::Instant::now(), pct));
        tracing::info!("loaded experiment config tenantId='{}' experimentTrafficPct='{}'", tenant_id, pct);
        Ok(pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::memory::InMemoryExperimentConfigStore;
    use std::time::Duration;

    fn cache(store: &Arc<InMemoryExperimentConfigStore>, ttl: Duration) -> ExperimentConfigCache {
        ExperimentConfigCache::new(store.clone(), ttl, 5)
    }

    fn config(tenant_id: Uuid, pct: i32) -> TenantExperimentConfig {
        TenantExperimentConfig {
            tenant_id,
            experiment_traffic_pct: pct,
        }
    }

    #[tokio::test]
    async fn serves_cached_value_within_ttl() {
        let store = Arc::new(InMemoryExperimentConfigStore::new());
        let tenant = Uuid::new_v4();
        store.upsert(config(tenant, 30)).await.unwrap();
        let cache = cache(&store, Duration::from_secs(300));

        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 30);
        store.upsert(config(tenant, 80)).await.unwrap();
        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 30);
        assert_eq!(store.loads(), 1);
    }

    #[tokio::test]
    async fn reloads_after_ttl() {
        let store = Arc::new(InMemoryExperimentConfigStore::new());
        let tenant = Uuid::new_v4();
        store.upsert(config(tenant, 30)).await.unwrap();
        let cache = cache(&store, Duration::from_millis(20));

        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 30);
        store.upsert(config(tenant, 80)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 80);
        assert_eq!(store.loads(), 2);
    }

    #[tokio::test]
    async fn missing_row_uses_default() {
        let store = Arc::new(InMemoryExperimentConfigStore::new());
        let cache = cache(&store, Duration::from_secs(300));
        assert_eq!(cache.traffic_percent(Uuid::new_v4()).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn out_of_range_rows_are_clamped() {
        let store = Arc::new(InMemoryExperimentConfigStore::new());
        let high = Uuid::new_v4();
        let low = Uuid::new_v4();
        store.upsert(config(high, 250)).await.unwrap();
        store.upsert(config(low, -4)).await.unwrap();
        let cache = cache(&store, Duration::from_secs(300));

        assert_eq!(cache.traffic_percent(high).await.unwrap(), 100);
        assert_eq!(cache.traffic_percent(low).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalidate_forces_reload() {
        let store = Arc::new(InMemoryExperimentConfigStore::new());
        let tenant = Uuid::new_v4();
        store.upsert(config(tenant, 30)).await.unwrap();
        let cache = cache(&store, Duration::from_secs(300));
        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 30);

        store.upsert(config(tenant, 70)).await.unwrap();
        cache.invalidate(tenant).await;
        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 70);
        assert_eq!(store.loads(), 2);
    }

    #[tokio::test]
    async fn update_is_visible_immediately() {
        let store = Arc::new(InMemoryExperimentConfigStore::new());
        let tenant = Uuid::new_v4();
        let cache = cache(&store, Duration::from_secs(300));
        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 5);

        cache.update(config(tenant, 40)).await.unwrap();
        assert_eq!(cache.traffic_percent(tenant).await.unwrap(), 40);
    }
}
