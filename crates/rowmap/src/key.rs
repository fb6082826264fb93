mod assign;
pub use assign::{AssignFailure, AssignReport, KeyAssigner};

mod query;
pub use query::QueryKeyGenerator;

mod sequence;
pub use sequence::SequenceKeyGenerator;

mod random;
pub use random::UuidKeyGenerator;

use rowmap_core::{stmt::Value, Result};

/// Produces new primary key values.
pub trait KeyGenerator: Send + Sync {
    fn generate_key(&self) -> Result<Value>;
}

impl<G: KeyGenerator + ?Sized> KeyGenerator for &G {
    fn generate_key(&self) -> Result<Value> {
        (**self).generate_key()
    }
}

impl<G: KeyGenerator + ?Sized> KeyGenerator for Box<G> {
    fn generate_key(&self) -> Result<Value> {
        (**self).generate_key()
    }
}
