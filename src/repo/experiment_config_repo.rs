use crate::domain::attempt::TenantExperimentConfig;
use crate::providers::ExperimentConfigStore;
use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct ExperimentConfigRepo {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl ExperimentConfigStore for ExperimentConfigRepo {
    async fn get_for_tenant(&self, tenant_id: Uuid) -> Result<Option<TenantExperimentConfig>> {
        let row = sqlx::query(
            "SELECT tenant_id, experiment_traffic_pct FROM payment_retries_config WHERE tenant_id=$1",
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| TenantExperimentConfig {
            tenant_id: r.get("tenant_id"),
            experiment_traffic_pct: r.get("experiment_traffic_pct"),
        }))
    }

    async fn upsert(&self, config: TenantExperimentConfig) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payment_retries_config (tenant_id, experiment_traffic_pct, updated_at)
            VALUES ($1,$2,now())
            ON CONFLICT (tenant_id) DO UPDATE SET
                experiment_traffic_pct=EXCLUDED.experiment_traffic_pct,
                updated_at=now()
            "#,
        )
        .bind(config.tenant_id)
        .bind(config.experiment_traffic_pct.clamp(0, 100))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
