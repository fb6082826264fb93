use super::KeyGenerator;

use rowmap_core::{stmt::Value, Result};
use uuid::Uuid;

/// Generates random (v4) UUID strings, for keys that need not be sequential
/// or assigned by the database.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn generate_key(&self) -> Result<Value> {
        Ok(Value::String(Uuid::new_v4().to_string()))
    }
}
