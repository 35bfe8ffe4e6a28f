use std::sync::Arc;

use rewards_core::{DomainError, DomainResult, ReceiptId};
use rewards_infra::{InMemoryLedger, PointsLedger};
use rewards_receipts::{Receipt, ScoreError};

/// Everything the handlers need, owned here and shared via an `Extension`.
#[derive(Clone)]
pub struct AppServices {
    ledger: Arc<dyn PointsLedger>,
}

impl AppServices {
    pub fn new(ledger: Arc<dyn PointsLedger>) -> Self {
        Self { ledger }
    }

    /// Fresh, empty in-memory ledger with random ids.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryLedger::new()))
    }

    /// Score a receipt and record the result under a new id.
    ///
    /// Nothing is recorded when scoring fails.
    pub fn process_receipt(&self, receipt: &Receipt) -> Result<ReceiptId, ScoreError> {
        let breakdown = rewards_receipts::score_breakdown(receipt)?;
        let points = breakdown.total();
        let id = self.ledger.record(points);

        tracing::info!(%id, points, retailer = %receipt.retailer, "receipt processed");
        tracing::debug!(%id, ?breakdown, "points breakdown");

        Ok(id)
    }

    /// Points previously recorded under `id`.
    pub fn points(&self, id: &str) -> DomainResult<i64> {
        let id: ReceiptId = id.parse()?;
        self.ledger.lookup(&id).ok_or(DomainError::NotFound)
    }
}
