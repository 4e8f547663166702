use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct CodeCounters {
    succeeded: AtomicU64,
    failed: AtomicU64,
}

type ProcessorBucket = RwLock<HashMap<i32, Arc<CodeCounters>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub succeeded: u64,
    pub failed: u64,
}

impl OutcomeCount {
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Process-lifetime success/failure counters per `(processor, code)` for control-group retries.
///
/// Buckets are created lazily. Creation takes a write lock on the outer map for a new
/// processor, or on that processor's bucket for a new code, and rechecks under it; increments
/// themselves are lock-free.
#[derive(Debug, Default)]
pub struct OutcomeStats {
    processors: RwLock<HashMap<String, Arc<ProcessorBucket>>>,
}

impl OutcomeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, processor: &str, code: i32) -> u64 {
        self.counters(processor, code)
            .succeeded
            .fetch_add(1, Ordering::AcqRel)
            + 1
    }

    pub fn record_failure(&self, processor: &str, code: i32) -> u64 {
        self.counters(processor, code)
            .failed
            .fetch_add(1, Ordering::AcqRel)
            + 1
    }

    pub fn count(&self, processor: &str, code: i32) -> OutcomeCount {
        self.existing(processor, code)
            .map(|c| OutcomeCount {
                succeeded: c.succeeded.load(Ordering::Acquire),
                failed: c.failed.load(Ordering::Acquire),
            })
            .unwrap_or_default()
    }

    pub fn total_retries(&self, processor: &str, code: i32) -> u64 {
        self.count(processor, code).total()
    }

    pub fn snapshot(&self) -> BTreeMap<String, BTreeMap<i32, OutcomeCount>> {
        let processors = self.processors.read().unwrap_or_else(PoisonError::into_inner);
        processors
            .iter()
            .map(|(processor, bucket)| {
                let bucket = bucket.read().unwrap_or_else(PoisonError::into_inner);
                let codes = bucket
                    .iter()
                    .map(|(code, c)| {
                        (
                            *code,
                            OutcomeCount {
                                succeeded: c.succeeded.load(Ordering::Acquire),
                                failed: c.failed.load(Ordering::Acquire),
                            },
                        )
                    })
                    .collect();
                (processor.clone(), codes)
            })
            .collect()
    }

    fn existing(&self, processor: &str, code: i32) -> Option<Arc<CodeCounters>> {
        let bucket = self
            .processors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(processor)
            .cloned()?;
        let codes = bucket.read().unwrap_or_else(PoisonError::into_inner);
        codes.get(&code).cloned()
    }

    fn counters(&self, processor: &str, code: i32) -> Arc<CodeCounters> {
        let bucket = self.bucket(processor);

        if let Some(found) = bucket
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&code)
        {
            return Arc::clone(found);
        }

        let mut codes = bucket.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(codes.entry(code).or_default())
    }

    fn bucket(&self, processor: &str) -> Arc<ProcessorBucket> {
        if let Some(found) = self
            .processors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(processor)
        {
            return Arc::clone(found);
        }

        let mut processors = self.processors.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(processors.entry(processor.to_string()).or_default())
    }
}
