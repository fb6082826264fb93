mod row;
pub use row::SqliteRow;

mod value;
use value::Param;

use parking_lot::Mutex;
use rowmap_core::{
    stmt::{Params, Value},
    Error, Executor, Result, Row,
};
use rusqlite::{types::ToSql, Connection};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

/// A [`Executor`] backed by one SQLite connection.
///
/// Parameters are bound by name: the [`Params`] entry `ID` binds `:ID`.
/// Entries the statement does not reference are ignored.
#[derive(Debug)]
pub struct Sqlite {
    location: Location,
    connection: Mutex<Connection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    InMemory,
    File(PathBuf),
}

impl Sqlite {
    /// Opens the database named by a connection URL, either
    /// `sqlite::memory:` or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Sqlite> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            rowmap_core::bail!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            );
        }

        if url.path() == ":memory:" {
            Sqlite::in_memory()
        } else {
            Sqlite::open(url.path())
        }
    }

    /// Creates an in-memory SQLite database
    pub fn in_memory() -> Result<Sqlite> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Sqlite::from_connection(Location::InMemory, connection))
    }

    /// Opens a SQLite database at the specified file path
    pub fn open(path: impl AsRef<Path>) -> Result<Sqlite> {
        let path = path.as_ref();
        let connection = Connection::open(path).map_err(Error::driver)?;
        Ok(Sqlite::from_connection(
            Location::File(path.to_path_buf()),
            connection,
        ))
    }

    fn from_connection(location: Location, connection: Connection) -> Sqlite {
        tracing::debug!(url = %url_of(&location), "opened SQLite connection");
        Sqlite {
            location,
            connection: Mutex::new(connection),
        }
    }

    pub fn url(&self) -> String {
        url_of(&self.location)
    }

    /// Runs one or more `;`-separated statements without parameters, e.g.
    /// schema setup.
    pub fn execute_script(&self, sql: &str) -> Result<()> {
        self.connection
            .lock()
            .execute_batch(sql)
            .map_err(Error::driver)
    }

    /// Runs a query and returns its rows, detached from the connection.
    pub fn fetch(&self, sql: &str, params: &Params) -> Result<Vec<SqliteRow>> {
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;

        let columns: Arc<[String]> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let bound = bind(&stmt, params)?;
        let mut rows = stmt.query(&named(&bound)[..]).map_err(Error::driver)?;
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut values = Vec::with_capacity(columns.len());

            for (index, column) in columns.iter().enumerate() {
                let value = row
                    .get_ref(index)
                    .map_err(|err| Error::row_access(column, Some(err)))?;
                values.push(value::load(column, value)?);
            }

            ret.push(SqliteRow::new(columns.clone(), values));
        }

        Ok(ret)
    }
}

impl Executor for Sqlite {
    fn execute(&self, sql: &str, params: &Params) -> Result<u64> {
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;
        let bound = bind(&stmt, params)?;
        let count = stmt.execute(&named(&bound)[..]).map_err(Error::driver)?;
        Ok(count as u64)
    }

    /// Returns the rowid of the inserted row.
    fn execute_returning_key(&self, sql: &str, params: &Params) -> Result<Option<Value>> {
        let connection = self.connection.lock();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;
        let bound = bind(&stmt, params)?;
        stmt.execute(&named(&bound)[..]).map_err(Error::driver)?;
        Ok(Some(Value::I64(connection.last_insert_rowid())))
    }

    /// Runs the whole batch in one transaction.
    fn execute_batch(&self, sql: &str, batch: &[Params]) -> Result<Vec<u64>> {
        let mut connection = self.connection.lock();
        let tx = connection.transaction().map_err(Error::driver)?;
        let mut counts = Vec::with_capacity(batch.len());

        {
            let mut stmt = tx.prepare_cached(sql).map_err(Error::driver)?;

            for params in batch {
                let bound = bind(&stmt, params)?;
                let count = stmt.execute(&named(&bound)[..]).map_err(Error::driver)?;
                counts.push(count as u64);
            }
        }

        tx.commit().map_err(Error::driver)?;
        Ok(counts)
    }

    /// Rows are fetched before `each` runs, so `each` may use this executor.
    fn query(
        &self,
        sql: &str,
        params: &Params,
        each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()> {
        for row in self.fetch(sql, params)? {
            each(&row)?;
        }
        Ok(())
    }

    fn query_values(&self, sql: &str, params: &Params) -> Result<Vec<Vec<Value>>> {
        Ok(self
            .fetch(sql, params)?
            .into_iter()
            .map(SqliteRow::into_values)
            .collect())
    }
}

fn url_of(location: &Location) -> String {
    match location {
        Location::InMemory => "sqlite::memory:".to_string(),
        Location::File(path) => format!("sqlite:{}", path.display()),
    }
}

/// Pairs each parameter the statement references with its `:name`.
fn bind<'a>(
    stmt: &rusqlite::Statement<'_>,
    params: &'a Params,
) -> Result<Vec<(String, Param<'a>)>> {
    let mut bound = Vec::with_capacity(params.len());

    for (name, value) in params {
        let name = format!(":{name}");

        if stmt.parameter_index(&name).map_err(Error::driver)?.is_some() {
            bound.push((name, Param(value)));
        }
    }

    Ok(bound)
}

fn named<'a>(bound: &'a [(String, Param<'_>)]) -> Vec<(&'a str, &'a dyn ToSql)> {
    bound
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
        .collect()
}
