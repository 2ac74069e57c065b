//! Packet id generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of ids for packets built without one.
pub trait IdGenerator: Send + Sync {
    /// Produce the next id.
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids. Used when no generator is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic ids `prefix0`, `prefix1`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator counting from zero.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let g = UuidGenerator;
        let a = g.next_id();
        assert_eq!(a.len(), 36);
        assert_ne!(a, g.next_id());
    }

    #[test]
    fn test_sequential_ids() {
        let g = SequentialIdGenerator::new("id_");
        assert_eq!(g.next_id(), "id_0");
        assert_eq!(g.next_id(), "id_1");
    }
}
