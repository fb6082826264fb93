use rowmap_core::{stmt::Value, Error, Result};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Binds a rowmap value as a SQLite parameter.
#[derive(Debug)]
pub(crate) struct Param<'a>(pub(crate) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
        }
    }
}

/// Converts the SQLite value of `column` to a rowmap value.
pub(crate) fn load(column: &str, value: ValueRef<'_>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::I64(v),
        ValueRef::Real(v) => Value::F64(v),
        ValueRef::Text(v) => match std::str::from_utf8(v) {
            Ok(v) => Value::String(v.to_string()),
            Err(err) => return Err(Error::row_access(column, Some(err))),
        },
        ValueRef::Blob(v) => Value::Bytes(v.to_vec()),
    })
}
