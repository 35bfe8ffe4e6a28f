//! `rewards-core` — foundation types shared by the rewards crates.
//!
//! Identifiers, the identifier generator capability, and the domain error
//! model. No IO, no HTTP, no storage.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, RandomIdGenerator, ReceiptId, SequentialIdGenerator};
