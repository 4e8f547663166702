use payment_retries::domain::attempt::{DecisionResult, Outcome};
use payment_retries::domain::decline::{DeclineCode, ErrorCategory};
use payment_retries::gate::retry_gate::{FixedDraw, RetryGate};
use payment_retries::gate::stats::{OutcomeCount, OutcomeStats};
use std::sync::Arc;
use uuid::Uuid;

fn expired_card() -> DeclineCode {
    DeclineCode {
        processor: "Braintree".to_string(),
        code: 2004,
        message: "Expired Card".to_string(),
        category: ErrorCategory::ExpiredCard,
        retryable: false,
    }
}

fn do_not_honor() -> DeclineCode {
    DeclineCode {
        processor: "Braintree".to_string(),
        code: 2000,
        message: "Do Not Honor".to_string(),
        category: ErrorCategory::GeneralDecline,
        retryable: true,
    }
}

fn gate(draw: u8) -> RetryGate {
    RetryGate::with_draw(Arc::new(OutcomeStats::new()), FixedDraw(draw))
}

#[test]
fn treatment_aborts_non_retryable_decline() {
    let g = gate(0);
    let id = Uuid::new_v4();

    assert_eq!(g.decide(id, Some(expired_card()), 100), DecisionResult::ABORT);
    assert_eq!(g.attempted(), 1);
    assert_eq!(g.aborted(), 1);
    assert!(!g.pending().contains(id));
}

#[test]
fn treatment_allows_retryable_decline() {
    let g = gate(0);
    assert_eq!(g.decide(Uuid::new_v4(), Some(do_not_honor()), 100), DecisionResult::ALLOW);
    assert_eq!(g.attempted(), 1);
    assert_eq!(g.aborted(), 0);
    assert!(g.pending().is_empty());
}

#[test]
fn control_allows_and_scores_the_outcome() {
    let g = gate(50);
    let id = Uuid::new_v4();

    assert_eq!(g.decide(id, Some(expired_card()), 50), DecisionResult::ALLOW);
    assert_eq!(g.attempted(), 1);
    assert_eq!(g.aborted(), 0);
    assert!(g.pending().contains(id));

    let count = g.on_outcome(id, Outcome::Success).unwrap();
    assert_eq!(count, OutcomeCount { succeeded: 1, failed: 0 });
    assert!(!g.pending().contains(id));
    assert_eq!(g.stats().count("Braintree", 2004).succeeded, 1);
}

#[test]
fn outcome_is_recorded_only_once() {
    let g = gate(99);
    let id = Uuid::new_v4();
    g.decide(id, Some(expired_card()), 0);

    assert!(g.on_outcome(id, Outcome::Failure).is_some());
    assert!(g.on_outcome(id, Outcome::Failure).is_none());
    assert!(g.on_outcome(id, Outcome::Success).is_none());
    assert_eq!(g.stats().count("Braintree", 2004), OutcomeCount { succeeded: 0, failed: 1 });
}

#[test]
fn unclassified_attempts_leave_no_trace() {
    let g = gate(0);
    let id = Uuid::new_v4();

    assert_eq!(g.decide(id, None, 100), DecisionResult::ALLOW);
    assert_eq!(g.attempted(), 0);
    assert!(g.pending().is_empty());
    assert!(g.on_outcome(id, Outcome::Success).is_none());
    assert!(g.stats().snapshot().is_empty());
}

#[test]
fn outcome_for_treatment_attempt_is_ignored() {
    let g = gate(0);
    let id = Uuid::new_v4();
    g.decide(id, Some(do_not_honor()), 100);

    assert!(g.on_outcome(id, Outcome::Success).is_none());
    assert!(g.stats().snapshot().is_empty());
}

#[test]
fn concurrent_decisions_and_outcomes_are_all_counted() {
    let g = Arc::new(gate(99));
    let threads = 8;
    let per_thread = 250;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let g = Arc::clone(&g);
            std::thread::spawn(move || {
                for i in 0..per_thread {
                    let id = Uuid::new_v4();
                    g.decide(id, Some(expired_card()), 0);
                    let outcome = if (t + i) % 2 == 0 { Outcome::Success } else { Outcome::Failure };
                    g.on_outcome(id, outcome);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let total = (threads * per_thread) as u64;
    let summary = g.summary();
    assert_eq!(summary.attempted, total);
    assert_eq!(summary.aborted, 0);
    assert_eq!(summary.pending, 0);
    assert_eq!(g.stats().total_retries("Braintree", 2004), total);
}

#[test]
fn concurrent_outcomes_report_distinct_bucket_counts() {
    let g = Arc::new(gate(99));
    let ids: Vec<Uuid> = (0..400).map(|_| Uuid::new_v4()).collect();
    for id in &ids {
        g.decide(*id, Some(do_not_honor()), 0);
    }

    let handles: Vec<_> = ids
        .chunks(50)
        .map(|chunk| {
            let g = Arc::clone(&g);
            let chunk = chunk.to_vec();
            std::thread::spawn(move || {
                chunk
                    .into_iter()
                    .map(|id| g.on_outcome(id, Outcome::Success).unwrap().succeeded)
                    .collect::<Vec<u64>>()
            })
        })
        .collect();
    let mut seen: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    seen.sort_unstable();

    assert_eq!(seen, (1..=400).collect::<Vec<u64>>());
}

#[test]
fn racing_outcomes_for_one_attempt_score_once() {
    for _ in 0..50 {
        let g = Arc::new(gate(99));
        let id = Uuid::new_v4();
        g.decide(id, Some(expired_card()), 0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let g = Arc::clone(&g);
                std::thread::spawn(move || g.on_outcome(id, Outcome::Failure).is_some())
            })
            .collect();
        let scored = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|s| *s)
            .count();

        assert_eq!(scored, 1);
        assert_eq!(g.stats().total_retries("Braintree", 2004), 1);
    }
}
