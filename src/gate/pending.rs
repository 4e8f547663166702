use crate::domain::decline::DeclineCode;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Control-group attempts waiting for their outcome, keyed by attempt id.
///
/// An entry whose outcome is never reported stays here until restart; `len` exposes how many
/// are outstanding.
#[derive(Debug, Default)]
pub struct PendingAttempts {
    inner: Mutex<HashMap<Uuid, DeclineCode>>,
}

impl PendingAttempts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, attempt_id: Uuid, decline: DeclineCode) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.insert(attempt_id, decline).is_some() {
            tracing::warn!("replaced pending control-group entry attemptPaymentId='{}'", attempt_id);
        }
    }

    /// Removes and returns the entry; only one of several concurrent callers gets it.
    pub fn take(&self, attempt_id: Uuid) -> Option<DeclineCode> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&attempt_id)
    }

    pub fn contains(&self, attempt_id: Uuid) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&attempt_id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decline::ErrorCategory;

    fn decline() -> DeclineCode {
        DeclineCode {
            processor: "Adyen".to_string(),
            code: 62,
            message: "Restricted card".to_string(),
            category: ErrorCategory::GeneralDecline,
            retryable: true,
        }
    }

    #[test]
    fn take_consumes_exactly_once() {
        let pending = PendingAttempts::new();
        let id = Uuid::new_v4();
        pending.register(id, decline());
        assert!(pending.contains(id));

        assert_eq!(pending.take(id), Some(decline()));
        assert_eq!(pending.take(id), None);
        assert!(pending.is_empty());
    }

    #[test]
    fn taking_unknown_id_is_a_no_op() {
        let pending = PendingAttempts::new();
        pending.register(Uuid::new_v4(), decline());
        assert_eq!(pending.take(Uuid::new_v4()), None);
        assert_eq!(pending.len(), 1);
    }
}
