//! # Identifier Sources
//!
//! A [`ResourceActor`](crate::ResourceActor) asks its `IdSource` for a fresh identifier on every
//! create, and on nothing else. Sources are shared behind an `Arc` so several actors can draw
//! from the same sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Produces unique string identifiers.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 32-hex-digit identifiers (UUID v4, simple form).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic decimal identifiers starting at 1. Deterministic, which makes it the choice for
/// tests and demos.
#[derive(Debug)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

/// Shared handle to an identifier source.
pub type SharedIds = Arc<dyn IdSource>;
