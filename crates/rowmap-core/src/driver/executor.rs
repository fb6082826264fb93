use super::Row;
use crate::{
    stmt::{Params, Value},
    Result,
};

/// Executes SQL text with named parameters.
///
/// This is the seam to the database layer; `rowmap` never opens connections
/// itself.
pub trait Executor {
    /// Executes an insert, update or delete and returns the affected row count.
    fn execute(&self, sql: &str, params: &Params) -> Result<u64>;

    /// Executes an insert and returns the key the database generated for it,
    /// if the adapter can report one.
    fn execute_returning_key(&self, sql: &str, params: &Params) -> Result<Option<Value>> {
        self.execute(sql, params)?;
        Ok(None)
    }

    /// Executes the statement once per parameter set, in order.
    fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>> {
        batch
            .iter()
            .map(|params| self.execute(sql, params))
            .collect()
    }

    /// Runs a query and hands every row to `each`, stopping at the first error.
    fn query(
        &self,
        sql: &str,
        params: &Params,
        each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()>;

    /// Runs a query and returns every row as positional values.
    fn query_values(&self, sql: &str, params: &Params) -> Result<Vec<Vec<Value>>>;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn execute(&self, sql: &str, params: &Params) -> Result<u64> {
        (**self).execute(sql, params)
    }

    fn execute_returning_key(&self, sql: &str, params: &Params) -> Result<Option<Value>> {
        (**self).execute_returning_key(sql, params)
    }

    fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>> {
        (**self).execute_batch(sql, batch)
    }

    fn query(
        &self,
        sql: &str,
        params: &Params,
        each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()> {
        (**self).query(sql, params, each)
    }

    fn query_values(&self, sql: &str, params: &Params) -> Result<Vec<Vec<Value>>> {
        (**self).query_values(sql, params)
    }
}
