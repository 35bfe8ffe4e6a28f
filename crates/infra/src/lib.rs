//! Infrastructure layer: storage for scored receipts.

pub mod ledger;

pub use ledger::{InMemoryLedger, PointsLedger};
