use super::KeyGenerator;
use crate::statement::StatementLoader;

use rowmap_core::{
    stmt::{Params, Value},
    Error, Executor, Result,
};
use std::sync::Arc;

/// Generates integer keys by running a query, e.g. a sequence's `NEXTVAL`.
///
/// The query takes no parameters and must return exactly one row with exactly
/// one integer column.
#[derive(Debug)]
pub struct QueryKeyGenerator<E> {
    sql: Arc<str>,
    executor: E,
}

impl<E: Executor> QueryKeyGenerator<E> {
    pub fn new(sql: impl Into<Arc<str>>, executor: E) -> QueryKeyGenerator<E> {
        QueryKeyGenerator {
            sql: sql.into(),
            executor,
        }
    }

    /// Uses the statement `name` of `loader` as the key query.
    pub fn from_loader(
        loader: &StatementLoader,
        name: &str,
        executor: E,
    ) -> Result<QueryKeyGenerator<E>> {
        Ok(QueryKeyGenerator::new(loader.load(name)?, executor))
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Runs the key query.
    pub fn new_id(&self) -> Result<i64> {
        let rows = self
            .executor
            .query_values(&self.sql, &Params::new())
            .map_err(|err| err.context(Error::key_generation("key query failed")))?;

        let [row] = &rows[..] else {
            return Err(Error::key_generation(format!(
                "expected 1 row from key query, got {}",
                rows.len()
            )));
        };

        let [value] = &row[..] else {
            return Err(Error::key_generation(format!(
                "expected 1 column from key query, got {}",
                row.len()
            )));
        };

        value.as_i64().ok_or_else(|| {
            Error::key_generation(format!(
                "expected an integer key, got {}",
                value.variant_name()
            ))
        })
    }
}

impl<E: Executor + Send + Sync> KeyGenerator for QueryKeyGenerator<E> {
    fn generate_key(&self) -> Result<Value> {
        self.new_id().map(Value::I64)
    }
}
