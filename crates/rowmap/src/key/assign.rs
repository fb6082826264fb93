use super::KeyGenerator;
use crate::{MetadataIndex, Record, Result};

use rowmap_core::Error;

/// Writes generated keys into records.
#[derive(Debug)]
pub struct KeyAssigner<'a, G> {
    generator: G,
    index: &'a MetadataIndex,
}

/// Outcome of [`KeyAssigner::assign_ids`].
#[derive(Debug, Default)]
pub struct AssignReport {
    /// Number of keys written
    pub assigned: usize,

    /// Key properties that were left untouched
    pub failures: Vec<AssignFailure>,
}

/// A key that could not be generated or written for one record property.
#[derive(Debug, Clone)]
pub struct AssignFailure {
    /// Position of the record in the input slice
    pub index: usize,
    pub property: String,
    pub error: Error,
}

impl AssignReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<G: KeyGenerator> KeyAssigner<'static, G> {
    /// An assigner backed by the process-wide [`MetadataIndex`].
    pub fn new(generator: G) -> KeyAssigner<'static, G> {
        KeyAssigner::with_index(generator, MetadataIndex::global())
    }
}

impl<'a, G: KeyGenerator> KeyAssigner<'a, G> {
    pub fn with_index(generator: G, index: &'a MetadataIndex) -> KeyAssigner<'a, G> {
        KeyAssigner { generator, index }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates one key and writes it to every writable property named
    /// `field`, compared ignoring ASCII case.
    ///
    /// When no property matches, the record is returned unchanged.
    pub fn assign_id<'r, T: Record>(&self, record: &'r mut T, field: &str) -> Result<&'r mut T> {
        let key = self
            .generator
            .generate_key()
            .map_err(|err| err.context(Error::key_assignment(T::type_name())))?;

        let metadata = self
            .index
            .metadata_for::<T>()
            .map_err(|err| err.context(Error::key_assignment(T::type_name())))?;

        let mut matched = false;

        for property in metadata.writable_properties_ignore_case(field) {
            matched = true;
            record
                .write(&property.name, key.clone())
                .map_err(|err| err.context(Error::key_assignment(T::type_name())))?;
        }

        if !matched {
            tracing::debug!(
                type_name = T::type_name(),
                field,
                "no writable property matches key field; record left unchanged"
            );
        }

        Ok(record)
    }

    /// [`assign_id`](Self::assign_id) for every record, in order. Stops at
    /// the first failure.
    pub fn assign_ids_named<T: Record>(&self, records: &mut [T], field: &str) -> Result<()> {
        for record in records {
            self.assign_id(record, field)?;
        }
        Ok(())
    }

    /// Writes a fresh key from `generator` into every writable key property of
    /// every record.
    ///
    /// Unlike [`assign_id`](Self::assign_id) this is lenient: a key that
    /// cannot be generated or written is recorded in the report and the batch
    /// carries on. Only a metadata failure is returned as an error.
    pub fn assign_ids<T: Record>(
        &self,
        records: &mut [T],
        generator: &dyn KeyGenerator,
    ) -> Result<AssignReport> {
        let metadata = self.index.metadata_for::<T>()?;
        let mut report = AssignReport::default();

        for (index, record) in records.iter_mut().enumerate() {
            for property in metadata.key_properties() {
                if !property.writable {
                    continue;
                }

                let res = generator
                    .generate_key()
                    .and_then(|key| record.write(&property.name, key));

                match res {
                    Ok(()) => report.assigned += 1,
                    Err(error) => {
                        tracing::warn!(
                            type_name = T::type_name(),
                            index,
                            property = %property.name,
                            %error,
                            "failed to assign key; continuing"
                        );
                        report.failures.push(AssignFailure {
                            index,
                            property: property.name.clone(),
                            error,
                        });
                    }
                }
            }
        }

        Ok(report)
    }
}
