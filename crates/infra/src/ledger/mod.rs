//! Points ledger: issued receipt ids and the points they earned.

pub mod in_memory;

use std::sync::Arc;

use rewards_core::ReceiptId;

pub use in_memory::InMemoryLedger;

/// Store of scored receipts.
///
/// Records are written once and never change or go away while the process
/// runs.
pub trait PointsLedger: Send + Sync {
    /// Store `points` under a freshly issued id and return that id.
    fn record(&self, points: i64) -> ReceiptId;
    fn lookup(&self, id: &ReceiptId) -> Option<i64>;
}

impl<S> PointsLedger for Arc<S>
where
    S: PointsLedger + ?Sized,
{
    fn record(&self, points: i64) -> ReceiptId {
        (**self).record(points)
    }

    fn lookup(&self, id: &ReceiptId) -> Option<i64> {
        (**self).lookup(id)
    }
}
