use crate::domain::attempt::{DecisionResult, ExperimentGroup, Outcome};
use crate::domain::decline::DeclineCode;
use crate::gate::pending::PendingAttempts;
use crate::gate::stats::{OutcomeCount, OutcomeStats};
use rand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Source of the per-attempt traffic split draw, a percentage in `[0, 100)`.
pub trait TrafficDraw: Send + Sync {
    fn draw_percent(&self) -> u8;
}

/// Uniform, unseeded draw per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDraw;

impl TrafficDraw for RandomDraw {
    fn draw_percent(&self) -> u8 {
        rand::thread_rng().gen_range(0..100)
    }
}

/// Always returns the same value; values above 99 are clamped.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub u8);

impl TrafficDraw for FixedDraw {
    fn draw_percent(&self) -> u8 {
        self.0.min(99)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GateSummary {
    pub attempted: u64,
    pub aborted: u64,
    pub pending: usize,
}

pub fn group_for(draw: u8, traffic_pct: u8) -> ExperimentGroup {
    if draw < traffic_pct.min(100) {
        ExperimentGroup::Treatment
    } else {
        ExperimentGroup::Control
    }
}

fn floor_pct(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64 * 100.0).floor()
    }
}

/// Applies classifications under the retry experiment and tracks control-group outcomes.
///
/// One instance per process; it owns the pending-attempt registry and the attempt counters.
pub struct RetryGate {
    pending: PendingAttempts,
    stats: Arc<OutcomeStats>,
    attempted: AtomicU64,
    aborted: AtomicU64,
    draw: Box<dyn TrafficDraw>,
}

impl RetryGate {
    pub fn new(stats: Arc<OutcomeStats>) -> Self {
        Self::with_draw(stats, RandomDraw)
    }

    pub fn with_draw(stats: Arc<OutcomeStats>, draw: impl TrafficDraw + 'static) -> Self {
        Self {
            pending: PendingAttempts::new(),
            stats,
            attempted: AtomicU64::new(0),
            aborted: AtomicU64::new(0),
            draw: Box::new(draw),
        }
    }

    /// Treatment attempts abort exactly when the decline is not retryable. Control attempts
    /// always proceed and are remembered so their outcome can be scored.
    pub fn decide(
        &self,
        attempt_id: Uuid,
        classification: Option<DeclineCode>,
        traffic_pct: u8,
    ) -> DecisionResult {
        let Some(decline) = classification else {
            return DecisionResult::ALLOW;
        };

        let group = group_for(self.draw.draw_percent(), traffic_pct);
        let abort = match group {
            ExperimentGroup::Treatment => !decline.retryable,
            ExperimentGroup::Control => false,
        };

        let attempted = self.attempted.fetch_add(1, Ordering::AcqRel) + 1;
        if abort {
            let aborted = self.aborted.fetch_add(1, Ordering::AcqRel) + 1;
            tracing::info!(
                "prevented retry attemptPaymentId='{}' totalAborted='{}' nbOfAttemptedRetries='{}' totalAbortedPct='{}' processorMessage='{}' processorCode='{}' isRetryable='{}'",
                attempt_id,
                aborted,
                attempted,
                floor_pct(aborted, attempted),
                decline.message,
                decline.code,
                decline.retryable
            );
        } else {
            tracing::info!(
                "allowed retry attemptPaymentId='{}' group='{:?}' nbOfAttemptedRetries='{}' processorMessage='{}' processorCode='{}' isRetryable='{}'",
                attempt_id,
                group,
                attempted,
                decline.message,
                decline.code,
                decline.retryable
            );
        }

        if group == ExperimentGroup::Control {
            self.pending.register(attempt_id, decline);
        }

        DecisionResult { abort }
    }

    /// Scores a control-group attempt against the decline that preceded it. Attempts that were
    /// never registered (treatment, unclassified, or already resolved) are ignored.
    pub fn on_outcome(&self, attempt_id: Uuid, outcome: Outcome) -> Option<OutcomeCount> {
        let decline = self.pending.take(attempt_id)?;

        let (count, bucket, verb) = match outcome {
            Outcome::Success => {
                let succeeded = self.stats.record_success(&decline.processor, decline.code);
                let failed = self.stats.count(&decline.processor, decline.code).failed;
                (OutcomeCount { succeeded, failed }, succeeded, "successful")
            }
            Outcome::Failure => {
                let failed = self.stats.record_failure(&decline.processor, decline.code);
                let succeeded = self.stats.count(&decline.processor, decline.code).succeeded;
                (OutcomeCount { succeeded, failed }, failed, "failed")
            }
        };

        tracing::info!(
            "{} retry attemptPaymentId='{}' nbOfRetries='{}' inBucket='{}' bucketPct='{}' processor='{}' processorMessage='{}' processorCode='{}' isRetryable='{}'",
            verb,
            attempt_id,
            count.total(),
            bucket,
            floor_pct(bucket, count.total()),
            decline.processor,
            decline.message,
            decline.code,
            decline.retryable
        );

        Some(count)
    }

    pub fn attempted(&self) -> u64 {
        self.attempted.load(Ordering::Acquire)
    }

    pub fn aborted(&self) -> u64 {
        self.aborted.load(Ordering::Acquire)
    }

    pub fn pending(&self) -> &PendingAttempts {
        &self.pending
    }

    pub fn stats(&self) -> &Arc<OutcomeStats> {
        &self.stats
    }

    pub fn summary(&self) -> GateSummary {
        GateSummary {
            attempted: self.attempted(),
            aborted: self.aborted(),
            pending: self.pending.len(),
        }
    }
}
