use crate::{MetadataIndex, Record, Result};

use rowmap_core::{stmt::Params, Error};

/// Converts records into named statement parameters.
#[derive(Debug, Clone, Copy)]
pub struct ParamsMapper<'a> {
    index: &'a MetadataIndex,
}

impl ParamsMapper<'static> {
    /// A mapper backed by the process-wide [`MetadataIndex`].
    pub fn new() -> ParamsMapper<'static> {
        ParamsMapper::with_index(MetadataIndex::global())
    }
}

impl Default for ParamsMapper<'static> {
    fn default() -> Self {
        ParamsMapper::new()
    }
}

impl<'a> ParamsMapper<'a> {
    pub fn with_index(index: &'a MetadataIndex) -> ParamsMapper<'a> {
        ParamsMapper { index }
    }

    /// Returns the record's mapped properties keyed by column name.
    ///
    /// Properties without a reader are left out.
    pub fn to_params<T: Record>(&self, record: &T) -> Result<Params> {
        let metadata = self.index.metadata_for::<T>()?;
        let mut params = Params::with_capacity(metadata.columns().len());

        for column in metadata.columns() {
            if !column.readable {
                continue;
            }

            let value = record
                .read(&column.property)
                .map_err(|err| err.context(Error::mapping(T::type_name(), &column.property)))?;

            params.insert(column.column.as_str(), value);
        }

        Ok(params)
    }

    /// Maps every record, preserving order.
    pub fn to_params_batch<'r, T, I>(&self, records: I) -> Result<Vec<Params>>
    where
        T: Record,
        I: IntoIterator<Item = &'r T>,
    {
        records
            .into_iter()
            .map(|record| self.to_params(record))
            .collect()
    }
}

/// Converts mapped parameter sets into the boxed slice form batch executors
/// take.
pub fn as_batch_values(batch: impl IntoIterator<Item = Params>) -> Box<[Params]> {
    batch.into_iter().collect()
}
