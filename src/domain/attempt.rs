use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptContext {
    pub attempt_id: Uuid,
    pub account_id: Uuid,
    pub payment_method_id: Uuid,
    pub tenant_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub abort: bool,
}

impl DecisionResult {
    pub const ALLOW: DecisionResult = DecisionResult { abort: false };
    pub const ABORT: DecisionResult = DecisionResult { abort: true };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Success,
    Failure,
}

/// Which side of the traffic split a classified attempt landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperimentGroup {
    Treatment,
    Control,
}

/// Stored per-tenant share of classified retries on which the verdict is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantExperimentConfig {
    pub tenant_id: Uuid,
    pub experiment_traffic_pct: i32,
}
