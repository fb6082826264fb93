use rowmap_core::{stmt::Value, Error, Result, Row};
use std::sync::Arc;

/// One fetched SQLite row, detached from its statement.
#[derive(Debug, Clone)]
pub struct SqliteRow {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl SqliteRow {
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<Value>) -> SqliteRow {
        debug_assert_eq!(columns.len(), values.len());
        SqliteRow { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    fn value(&self, column: &str) -> Result<&Value> {
        // SQLite column names are case-insensitive
        self.columns
            .iter()
            .position(|name| name.eq_ignore_ascii_case(column))
            .map(|index| &self.values[index])
            .ok_or_else(|| Error::row_access(column, Some(NoSuchColumn)))
    }
}

impl Row for SqliteRow {
    fn get_i64(&self, column: &str) -> Result<Option<i64>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::I64(v) => Ok(Some(*v)),
            value => Err(Error::type_conversion(value.clone(), "i64")
                .context(Error::row_access(column, None::<Error>))),
        }
    }

    /// Integer and real values are rendered as text.
    fn get_string(&self, column: &str) -> Result<Option<String>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::String(v) => Ok(Some(v.clone())),
            Value::I64(v) => Ok(Some(v.to_string())),
            Value::F64(v) => Ok(Some(v.to_string())),
            value => Err(Error::type_conversion(value.clone(), "String")
                .context(Error::row_access(column, None::<Error>))),
        }
    }

    fn get_value(&self, column: &str) -> Result<Value> {
        self.value(column).cloned()
    }
}

#[derive(Debug)]
struct NoSuchColumn;

impl std::error::Error for NoSuchColumn {}

impl core::fmt::Display for NoSuchColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no such column in result set")
    }
}
