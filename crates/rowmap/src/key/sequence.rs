use super::KeyGenerator;

use rowmap_core::{stmt::Value, Result};
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out increasing integer keys from an in-process counter.
///
/// Keys are unique per generator instance only.
#[derive(Debug)]
pub struct SequenceKeyGenerator {
    next: AtomicI64,
}

impl SequenceKeyGenerator {
    pub fn starting_at(first: i64) -> SequenceKeyGenerator {
        SequenceKeyGenerator {
            next: AtomicI64::new(first),
        }
    }

    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SequenceKeyGenerator {
    fn default() -> Self {
        SequenceKeyGenerator::starting_at(1)
    }
}

impl KeyGenerator for SequenceKeyGenerator {
    fn generate_key(&self) -> Result<Value> {
        Ok(Value::I64(self.next_id()))
    }
}
