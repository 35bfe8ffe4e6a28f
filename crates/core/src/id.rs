//! Receipt identifiers and the generator capability that mints them.

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque identifier handed out when a receipt is scored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl core::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ReceiptId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ReceiptId> for Uuid {
    fn from(value: ReceiptId) -> Self {
        value.0
    }
}

impl FromStr for ReceiptId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ReceiptId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Source of fresh receipt identifiers.
///
/// Every call must return an id never returned before by the same generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

/// Random UUIDv4 identifiers (122 random bits).
#[derive(Debug, Default, Copy, Clone)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4())
    }
}

/// Deterministic identifiers from a counter: 1, 2, 3, ... as UUIDs.
///
/// Prefer this in tests so issued ids are predictable.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ReceiptId(Uuid::from_u128(u128::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        let id = RandomIdGenerator.next_id();
        let parsed: ReceiptId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = "not-a-receipt".parse::<ReceiptId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ReceiptId:")),
            _ => panic!("Expected InvalidId"),
        }
    }

    #[test]
    fn random_ids_are_distinct() {
        let a = RandomIdGenerator.next_id();
        let b = RandomIdGenerator.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_ids_count_up_from_one() {
        let generator = SequentialIdGenerator::new();
        assert_eq!(
            generator.next_id().to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
        assert_eq!(
            generator.next_id().to_string(),
            "00000000-0000-0000-0000-000000000002"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SequentialIdGenerator::new().next_id();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
    }
}
