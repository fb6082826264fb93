use crate::{Record, Result};

use parking_lot::RwLock;
use rowmap_core::schema::TypeMetadata;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock},
};

/// Caches the [`TypeMetadata`] of record types.
///
/// Metadata is built on first request and kept for the lifetime of the index.
/// Lookups of populated entries only take the shared lock; population happens
/// under the exclusive lock so each type is built at most once.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    types: RwLock<HashMap<TypeId, Arc<TypeMetadata>>>,
}

impl MetadataIndex {
    pub fn new() -> MetadataIndex {
        MetadataIndex::default()
    }

    /// The process-wide index.
    pub fn global() -> &'static MetadataIndex {
        static GLOBAL: OnceLock<MetadataIndex> = OnceLock::new();
        GLOBAL.get_or_init(MetadataIndex::new)
    }

    /// Returns the metadata of `T`, building it on first use.
    ///
    /// A failed build is returned to the caller and not cached.
    pub fn metadata_for<T: Record>(&self) -> Result<Arc<TypeMetadata>> {
        let type_id = TypeId::of::<T>();

        if let Some(metadata) = self.types.read().get(&type_id) {
            return Ok(metadata.clone());
        }

        let mut types = self.types.write();

        // Another caller may have populated the entry while we waited.
        if let Some(metadata) = types.get(&type_id) {
            return Ok(metadata.clone());
        }

        let metadata = Arc::new(TypeMetadata::from_properties(
            T::type_name(),
            T::properties(),
        )?);

        tracing::debug!(
            type_name = T::type_name(),
            columns = metadata.columns().len(),
            "built record metadata"
        );

        types.insert(type_id, metadata.clone());
        Ok(metadata)
    }

    /// Number of cached types.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}
