use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use rewards_core::{IdGenerator, RandomIdGenerator, ReceiptId};

use super::PointsLedger;

/// In-memory ledger; lives as long as its owner.
///
/// Lock poisoning is ignored: every write is a single insert, so the map is
/// never left half-updated.
#[derive(Debug)]
pub struct InMemoryLedger<G = RandomIdGenerator> {
    ids: G,
    inner: RwLock<HashMap<ReceiptId, i64>>,
}

impl InMemoryLedger<RandomIdGenerator> {
    pub fn new() -> Self {
        Self::with_generator(RandomIdGenerator)
    }
}

impl Default for InMemoryLedger<RandomIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> InMemoryLedger<G> {
    pub fn with_generator(ids: G) -> Self {
        Self {
            ids,
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G: IdGenerator> PointsLedger for InMemoryLedger<G> {
    fn record(&self, points: i64) -> ReceiptId {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        loop {
            let id = self.ids.next_id();
            match map.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(points);
                    return id;
                }
                Entry::Occupied(_) => {
                    tracing::warn!(%id, "id generator returned an id already in use; drawing again");
                }
            }
        }
    }

    fn lookup(&self, id: &ReceiptId) -> Option<i64> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rewards_core::SequentialIdGenerator;

    /// Replays a fixed script of ids, then falls back to a counter.
    struct ScriptedIds {
        script: Vec<ReceiptId>,
        calls: AtomicUsize,
        fallback: SequentialIdGenerator,
    }

    impl IdGenerator for ScriptedIds {
        fn next_id(&self) -> ReceiptId {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.script.get(n).copied().unwrap_or_else(|| self.fallback.next_id())
        }
    }

    #[test]
    fn starts_empty() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.is_empty());
    }

    #[test]
    fn recorded_points_can_be_looked_up() {
        let ledger = InMemoryLedger::new();
        let id = ledger.record(28);
        assert_eq!(ledger.lookup(&id), Some(28));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn recording_twice_issues_distinct_ids() {
        let ledger = InMemoryLedger::new();
        let first = ledger.record(28);
        let second = ledger.record(109);

        assert_ne!(first, second);
        assert_eq!(ledger.lookup(&first), Some(28));
        assert_eq!(ledger.lookup(&second), Some(109));
    }

    #[test]
    fn equal_scores_get_their_own_ids() {
        let ledger = InMemoryLedger::new();
        let a = ledger.record(7);
        let b = ledger.record(7);
        assert_ne!(a, b);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let ledger = InMemoryLedger::new();
        ledger.record(1);
        let never_issued = RandomIdGenerator.next_id();
        assert_eq!(ledger.lookup(&never_issued), None);
    }

    #[test]
    fn lookup_does_not_mutate() {
        let ledger = InMemoryLedger::new();
        ledger.lookup(&RandomIdGenerator.next_id());
        assert!(ledger.is_empty());
    }

    #[test]
    fn injected_generator_controls_ids() {
        let ledger = InMemoryLedger::with_generator(SequentialIdGenerator::new());
        let id = ledger.record(5);
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn colliding_id_is_redrawn_and_first_record_kept() {
        let taken = SequentialIdGenerator::new().next_id();
        let ids = ScriptedIds {
            script: vec![taken, taken],
            calls: AtomicUsize::new(0),
            fallback: SequentialIdGenerator::new(),
        };
        let ledger = InMemoryLedger::with_generator(ids);

        let first = ledger.record(10);
        // Scripted id is used up, and the fallback's first id equals it too.
        let second = ledger.record(20);

        assert_eq!(first, taken);
        assert_ne!(second, taken);
        assert_eq!(ledger.lookup(&first), Some(10));
        assert_eq!(ledger.lookup(&second), Some(20));
    }

    #[test]
    fn concurrent_records_are_all_kept() {
        let ledger = Arc::new(InMemoryLedger::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .map(|i| (ledger.record(t * 100 + i), t * 100 + i))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let issued: Vec<(ReceiptId, i64)> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ledger.len(), 800);
        for (id, points) in issued {
            assert_eq!(ledger.lookup(&id), Some(points));
        }
    }

    #[test]
    fn shared_ledger_through_arc() {
        let ledger: Arc<dyn PointsLedger> = Arc::new(InMemoryLedger::new());
        let id = ledger.record(3);
        assert_eq!(ledger.lookup(&id), Some(3));
    }
}
