use crate::{MetadataIndex, Record, Result};

use rowmap_core::{driver::Row, stmt::Params, Error, Executor};
use std::marker::PhantomData;

/// Builds records of type `T` from result rows.
#[derive(Debug)]
pub struct RowMapper<'a, T> {
    index: &'a MetadataIndex,
    _p: PhantomData<fn() -> T>,
}

/// A record mapped from a row, with the properties that could not be written.
#[derive(Debug)]
pub struct Mapped<T> {
    pub record: T,

    /// Writes rejected because the row value's type did not fit the property.
    /// The property keeps its default value.
    pub failures: Vec<FieldFailure>,
}

/// A property write that failed without aborting the surrounding operation.
#[derive(Debug, Clone)]
pub struct FieldFailure {
    pub property: String,
    pub column: String,
    pub error: Error,
}

impl<T> Mapped<T> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<T: Record> RowMapper<'static, T> {
    /// A mapper backed by the process-wide [`MetadataIndex`].
    pub fn new() -> RowMapper<'static, T> {
        RowMapper::with_index(MetadataIndex::global())
    }
}

impl<T: Record> Default for RowMapper<'static, T> {
    fn default() -> Self {
        RowMapper::new()
    }
}

impl<T> Clone for RowMapper<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowMapper<'_, T> {}

impl<'a, T: Record> RowMapper<'a, T> {
    pub fn with_index(index: &'a MetadataIndex) -> RowMapper<'a, T> {
        RowMapper {
            index,
            _p: PhantomData,
        }
    }

    /// Instantiates a default `T` and writes every mapped, writable property
    /// from the row.
    ///
    /// Columns are read with the coercion of the property's type. A write the
    /// record rejects as a type mismatch is recorded in [`Mapped::failures`]
    /// and mapping continues; any other write failure aborts with a mapping
    /// error. Row read failures abort the row.
    pub fn map_row(&self, row: &dyn Row) -> Result<Mapped<T>> {
        let metadata = self.index.metadata_for::<T>()?;
        let mut record = T::default();
        let mut failures = vec![];

        for column in metadata.columns() {
            if !column.writable {
                continue;
            }

            let value = row.get(&column.column, column.ty)?;

            match record.write(&column.property, value) {
                Ok(()) => {}
                Err(err) if err.is_type_conversion() => {
                    failures.push(FieldFailure {
                        property: column.property.clone(),
                        column: column.column.clone(),
                        error: err,
                    });
                }
                Err(err) => {
                    return Err(err.context(Error::mapping(T::type_name(), &column.property)));
                }
            }
        }

        Ok(Mapped { record, failures })
    }

    /// Like [`map_row`](Self::map_row), logging and dropping recorded failures.
    pub fn from_row(&self, row: &dyn Row) -> Result<T> {
        let mapped = self.map_row(row)?;

        for failure in &mapped.failures {
            tracing::warn!(
                type_name = T::type_name(),
                property = %failure.property,
                column = %failure.column,
                error = %failure.error,
                "skipped property with incompatible row value"
            );
        }

        Ok(mapped.record)
    }

    /// Runs `sql` and maps every returned row.
    pub fn query<E>(&self, executor: &E, sql: &str, params: &Params) -> Result<Vec<T>>
    where
        E: Executor + ?Sized,
    {
        let mut records = vec![];
        executor.query(sql, params, &mut |row| {
            records.push(self.from_row(row)?);
            Ok(())
        })?;
        Ok(records)
    }
}
