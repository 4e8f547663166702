use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Plugin property that, when present, overrides the gateway error code as the raw decline code.
pub const PROCESSOR_RESPONSE_PROPERTY: &str = "processorResponse";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Authorize,
    Purchase,
    Capture,
    Void,
    Refund,
    Credit,
    Chargeback,
}

impl TransactionType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "AUTHORIZE" => Some(TransactionType::Authorize),
            "PURCHASE" => Some(TransactionType::Purchase),
            "CAPTURE" => Some(TransactionType::Capture),
            "VOID" => Some(TransactionType::Void),
            "REFUND" => Some(TransactionType::Refund),
            "CREDIT" => Some(TransactionType::Credit),
            "CHARGEBACK" => Some(TransactionType::Chargeback),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Success,
    Pending,
    PaymentFailure,
    PluginFailure,
    Unknown,
}

impl TransactionStatus {
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "SUCCESS" => TransactionStatus::Success,
            "PENDING" => TransactionStatus::Pending,
            "PAYMENT_FAILURE" => TransactionStatus::PaymentFailure,
            "PLUGIN_FAILURE" => TransactionStatus::PluginFailure,
            _ => TransactionStatus::Unknown,
        }
    }
}

/// What the payment plugin reported back for a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPluginInfo {
    pub gateway_error_code: Option<String>,
    pub gateway_error: Option<String>,
    pub properties: HashMap<String, String>,
}

impl TransactionPluginInfo {
    pub fn raw_error_code(&self) -> Option<&str> {
        self.properties
            .get(PROCESSOR_RESPONSE_PROPERTY)
            .map(String::as_str)
            .or(self.gateway_error_code.as_deref())
    }

    pub fn raw_error_message(&self) -> Option<&str> {
        self.gateway_error.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub transaction_id: Uuid,
    pub external_key: String,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub gateway_error_code: Option<String>,
    pub gateway_error_msg: Option<String>,
    pub plugin_info: Option<TransactionPluginInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: Uuid,
    pub external_key: String,
    pub account_id: Uuid,
    pub payment_method_id: Uuid,
    pub auth_amount_minor: Option<i64>,
    pub is_auth_voided: bool,
    /// Chronological.
    pub transactions: Vec<PaymentTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRecord {
    pub payment_method_id: Uuid,
    pub plugin_name: String,
}

/// Picks the authorization to classify for `payment_method_id` out of an account's
/// chronologically ordered payments.
///
/// Only the last payment made with that payment method counts. A non-zero auth amount or a
/// voided auth on it means the previous authorization went through, so there is nothing to
/// classify. Otherwise the last transaction that is either an authorization or a payment
/// failure is returned.
pub fn last_failed_authorization(
    payments: &[Payment],
    payment_method_id: Uuid,
) -> Option<&PaymentTransaction> {
    let last_payment = payments
        .iter()
        .rev()
        .find(|p| p.payment_method_id == payment_method_id)?;

    let auth_succeeded = last_payment.auth_amount_minor.is_some_and(|a| a != 0);
    if auth_succeeded || last_payment.is_auth_voided {
        return None;
    }

    last_payment
        .transactions
        .iter()
        .rev()
        .find(|t| {
            t.transaction_type == TransactionType::Authorize
                || t.status == TransactionStatus::PaymentFailure
        })
}
