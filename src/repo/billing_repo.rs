use crate::domain::billing::{
    Payment, PaymentMethodRecord, PaymentTransaction, TransactionPluginInfo, TransactionStatus,
    TransactionType,
};
use crate::providers::{PaymentMethodProvider, TransactionHistoryProvider};
use anyhow::Result;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

/// Read-only view over the billing tables.
#[derive(Clone)]
pub struct BillingRepo {
    pub pool: PgPool,
}

impl BillingRepo {
    async fn load_payments(&self, rows: Vec<sqlx::postgres::PgRow>) -> Result<Vec<Payment>> {
        let mut payments: Vec<Payment> = rows
            .into_iter()
            .map(|r| Payment {
                payment_id: r.get("payment_id"),
                external_key: r.get("external_key"),
                account_id: r.get("account_id"),
                payment_method_id: r.get("payment_method_id"),
                auth_amount_minor: r.get("auth_amount_minor"),
                is_auth_voided: r.get("is_auth_voided"),
                transactions: Vec::new(),
            })
            .collect();
        if payments.is_empty() {
            return Ok(payments);
        }

        let payment_ids: Vec<Uuid> = payments.iter().map(|p| p.payment_id).collect();
        let tx_rows = sqlx::query(
            r#"
            SELECT transaction_id, payment_id, external_key, transaction_type, status,
                   gateway_error_code, gateway_error_msg,
                   plugin_info_present, plugin_gateway_error_code, plugin_gateway_error
            FROM payment_transactions
            WHERE payment_id = ANY($1)
            ORDER BY created_at ASC, transaction_id ASC
            "#,
        )
        .bind(&payment_ids)
        .fetch_all(&self.pool)
        .await?;

        let transaction_ids: Vec<Uuid> = tx_rows.iter().map(|r| r.get("transaction_id")).collect();
        let mut properties: HashMap<Uuid, HashMap<String, String>> = HashMap::new();
        if !transaction_ids.is_empty() {
            let prop_rows = sqlx::query(
                "SELECT transaction_id, key, value FROM payment_transaction_properties WHERE transaction_id = ANY($1)",
            )
            .bind(&transaction_ids)
            .fetch_all(&self.pool)
            .await?;
            for r in prop_rows {
                properties
                    .entry(r.get("transaction_id"))
                    .or_default()
                    .insert(r.get("key"), r.get("value"));
            }
        }

        let mut by_payment: HashMap<Uuid, Vec<PaymentTransaction>> = HashMap::new();
        for r in tx_rows {
            let transaction_id: Uuid = r.get("transaction_id");
            let raw_type: String = r.get("transaction_type");
            let Some(transaction_type) = TransactionType::parse(&raw_type) else {
                tracing::warn!(
                    "skipping transaction transactionId='{}' with unknown type='{}'",
                    transaction_id,
                    raw_type
                );
                continue;
            };
            let status: String = r.get("status");
            let plugin_info_present: bool = r.get("plugin_info_present");
            let plugin_info = plugin_info_present.then(|| TransactionPluginInfo {
                gateway_error_code: r.get("plugin_gateway_error_code"),
                gateway_error: r.get("plugin_gateway_error"),
                properties: properties.remove(&transaction_id).unwrap_or_default(),
            });

            by_payment
                .entry(r.get("payment_id"))
                .or_default()
                .push(PaymentTransaction {
                    transaction_id,
                    external_key: r.get("external_key"),
                    transaction_type,
                    status: TransactionStatus::parse(&status),
                    gateway_error_code: r.get("gateway_error_code"),
                    gateway_error_msg: r.get("gateway_error_msg"),
                    plugin_info,
                });
        }

        for payment in &mut payments {
            payment.transactions = by_payment.remove(&payment.payment_id).unwrap_or_default();
        }
        Ok(payments)
    }
}

#[async_trait::async_trait]
impl TransactionHistoryProvider for BillingRepo {
    async fn account_payments(&self, account_id: Uuid, tenant_id: Uuid) -> Result<Vec<Payment>> {
        let rows = sqlx::query(
            r#"
            SELECT payment_id, external_key, account_id, payment_method_id, auth_amount_minor, is_auth_voided
            FROM payments
            WHERE account_id = $1 AND tenant_id = $2
            ORDER BY created_at ASC, payment_id ASC
            "#,
        )
        .bind(account_id)
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        self.load_payments(rows).await
    }

    async fn payment_by_external_key(
        &self,
        payment_external_key: &str,
        tenant_id: Uuid,
    ) -> Result<Option<Payment>> {
        let rows = sqlx::query(
            r#"
            SELECT payment_id, external_key, account_id, payment_method_id, auth_amount_minor, is_auth_voided
            FROM payments
            WHERE external_key = $1 AND tenant_id = $2
            "#,
        )
        .bind(payment_external_key)
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(self.load_payments(rows).await?.into_iter().next())
    }
}

#[async_trait::async_trait]
impl PaymentMethodProvider for BillingRepo {
    async fn payment_method(
        &self,
        payment_method_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Option<PaymentMethodRecord>> {
        let row = sqlx::query(
            "SELECT payment_method_id, plugin_name FROM payment_methods WHERE payment_method_id=$1 AND tenant_id=$2",
        )
        .bind(payment_method_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| PaymentMethodRecord {
            payment_method_id: r.get("payment_method_id"),
            plugin_name: r.get("plugin_name"),
        }))
    }
}
