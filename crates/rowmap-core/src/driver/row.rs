use crate::{
    schema::ColumnType,
    stmt::{Params, Value},
    Error, Result,
};

/// Typed access to one fetched row, by column name.
///
/// Implementations report absent columns and adapter faults as
/// [`Error::row_access`].
pub trait Row {
    /// Reads the column as a 64-bit integer; `None` for SQL `NULL`.
    fn get_i64(&self, column: &str) -> Result<Option<i64>>;

    /// Reads the column as a string; `None` for SQL `NULL`.
    fn get_string(&self, column: &str) -> Result<Option<String>>;

    /// Reads the column as whatever value the row natively holds.
    fn get_value(&self, column: &str) -> Result<Value>;

    /// Reads the column with the coercion selected by `ty`.
    fn get(&self, column: &str, ty: ColumnType) -> Result<Value> {
        match ty {
            ColumnType::Integer => Ok(self.get_i64(column)?.into()),
            ColumnType::Text => Ok(self.get_string(column)?.into()),
            ColumnType::Other => self.get_value(column),
        }
    }
}

impl Row for Params {
    fn get_i64(&self, column: &str) -> Result<Option<i64>> {
        match self.get_value(column)? {
            Value::Null => Ok(None),
            value => match value.as_i64() {
                Some(v) => Ok(Some(v)),
                None => Err(Error::type_conversion(value, "i64")
                    .context(Error::row_access(column, None::<Error>))),
            },
        }
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        match self.get_value(column)? {
            Value::Null => Ok(None),
            Value::String(v) => Ok(Some(v)),
            value => Err(Error::type_conversion(value, "String")
                .context(Error::row_access(column, None::<Error>))),
        }
    }

    fn get_value(&self, column: &str) -> Result<Value> {
        match Params::get(self, column) {
            Some(value) => Ok(value.clone()),
            None => Err(Error::row_access(column, Some(NoSuchColumn))),
        }
    }
}

#[derive(Debug)]
struct NoSuchColumn;

impl std::error::Error for NoSuchColumn {}

impl core::fmt::Display for NoSuchColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no such column")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::params;

    #[test]
    fn coerced_reads() {
        let row = params("ID", 7_i64).param("NAME", "Ada").param("NICK", None::<String>);

        assert_eq!(row.get_i64("ID").unwrap(), Some(7));
        assert_eq!(row.get_string("NAME").unwrap(), Some("Ada".to_string()));
        assert_eq!(row.get_string("NICK").unwrap(), None);
        assert_eq!(
            Row::get(&row, "NAME", ColumnType::Other).unwrap(),
            Value::from("Ada")
        );
    }

    #[test]
    fn missing_column_is_row_access_error() {
        let row = Params::new();
        let err = row.get_value("ID").unwrap_err();
        assert!(err.is_row_access());
        assert_eq!(err.to_string(), "failed to read column `ID`: no such column");
    }

    #[test]
    fn wrong_native_type_is_row_access_error() {
        let row = params("ID", "seven");
        let err = row.get_i64("ID").unwrap_err();
        assert!(err.is_row_access());
        assert!(err.root().is_type_conversion());
    }
}
