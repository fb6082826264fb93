use super::{Dialect, Owner, Resources};

use parking_lot::Mutex;
use rowmap_core::{Error, Result};
use std::{collections::HashMap, sync::Arc};

/// Loads and caches the statements of one owner for one dialect.
///
/// Obtain instances from a [`LoaderRegistry`](super::LoaderRegistry). Once a
/// statement is loaded its text never changes for the life of the loader.
#[derive(Debug)]
pub struct StatementLoader {
    owner: Owner,
    dialect: Dialect,
    resources: Arc<dyn Resources>,

    /// Logical statement name to statement text
    statements: Mutex<HashMap<String, Arc<str>>>,
}

impl StatementLoader {
    pub(super) fn new(owner: Owner, dialect: Dialect, resources: Arc<dyn Resources>) -> Self {
        StatementLoader {
            owner,
            dialect,
            resources,
            statements: Mutex::new(HashMap::new()),
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the text of the statement `name`, reading it on first use.
    ///
    /// Lookup, read and insert happen under one lock, so concurrent first
    /// loads of the same name read the resource once.
    pub fn load(&self, name: &str) -> Result<Arc<str>> {
        let mut statements = self.statements.lock();

        if let Some(statement) = statements.get(name) {
            return Ok(statement.clone());
        }

        let statement: Arc<str> = self.read_statement(name)?.into();

        tracing::debug!(
            owner = self.owner.type_name(),
            dialect = %self.dialect,
            name,
            "loaded SQL statement"
        );

        statements.insert(name.to_string(), statement.clone());
        Ok(statement)
    }

    fn read_statement(&self, name: &str) -> Result<String> {
        let specific = format!("sql/{}/{}.sql", self.dialect, name);

        let text = match self.resources.read(&self.owner, &specific)? {
            Some(text) => text,
            None => {
                let common = format!("sql/{name}.sql");

                match self.resources.read(&self.owner, &common)? {
                    Some(text) => text,
                    None => {
                        return Err(Error::resource_not_found(
                            &self.owner.qualified_name(),
                            name,
                        ))
                    }
                }
            }
        };

        let mut buffer = String::with_capacity(text.len() + 64);

        if self.dialect.supports_inline_comments() {
            // Picked up by SQL monitoring tools
            buffer.push_str("/*+ JDBC<");
            buffer.push_str(&self.owner.qualified_name().to_uppercase());
            buffer.push_str(">*/ ");
        }

        for line in text.lines() {
            buffer.push_str(line);
            buffer.push('\n');
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::EmbeddedResources;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct PersonDao;

    #[derive(Debug)]
    struct Counting {
        inner: EmbeddedResources,
        reads: AtomicUsize,
    }

    impl Resources for Counting {
        fn read(&self, owner: &Owner, path: &str) -> Result<Option<String>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read(owner, path)
        }
    }

    fn loader(dialect: Dialect, resources: EmbeddedResources) -> StatementLoader {
        StatementLoader::new(Owner::of::<PersonDao>(), dialect, Arc::new(resources))
    }

    #[test]
    fn dialect_file_wins() {
        let resources = EmbeddedResources::new()
            .with::<PersonDao>("sql/find.sql", "select * from person")
            .with::<PersonDao>("sql/postgres/find.sql", "select * from pg_person");

        let loader = loader(Dialect::Postgres, resources);
        assert_eq!(&*loader.load("find").unwrap(), "select * from pg_person\n");
    }

    #[test]
    fn falls_back_to_common_file() {
        let resources = EmbeddedResources::new()
            .with::<PersonDao>("sql/find.sql", "select *\r\nfrom person");

        let loader = loader(Dialect::Hsqldb, resources);
        assert_eq!(&*loader.load("find").unwrap(), "select *\nfrom person\n");
    }

    #[test]
    fn oracle_statements_carry_owner_comment() {
        let resources =
            EmbeddedResources::new().with::<PersonDao>("sql/oracle/find.sql", "select 1 from dual");

        let loader = loader(Dialect::Oracle, resources);
        assert_eq!(
            &*loader.load("find").unwrap(),
            "/*+ JDBC<ROWMAP.STATEMENT.LOADER.TESTS.PERSONDAO>*/ select 1 from dual\n"
        );
    }

    #[test]
    fn missing_statement() {
        let loader = loader(Dialect::Postgres, EmbeddedResources::new());
        let err = loader.load("nope").unwrap_err();

        assert!(err.is_resource_not_found());
        assert_eq!(
            err.to_string(),
            "unable to load SQL resource; owner=rowmap.statement.loader.tests.PersonDao, name=nope"
        );
    }

    #[test]
    fn concurrent_loads_read_once() {
        use std::sync::Barrier;

        let resources = Counting {
            inner: EmbeddedResources::new().with::<PersonDao>("sql/find.sql", "select 1"),
            reads: AtomicUsize::new(0),
        };
        let resources = Arc::new(resources);
        let loader = StatementLoader::new(
            Owner::of::<PersonDao>(),
            Dialect::Postgres,
            resources.clone(),
        );
        let barrier = Barrier::new(8);

        let all: Vec<Arc<str>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        loader.load("find").unwrap()
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for statement in &all[1..] {
            assert!(Arc::ptr_eq(&all[0], statement));
        }

        // One miss on the dialect path, one hit on the common path
        assert_eq!(resources.reads.load(Ordering::SeqCst), 2);
    }
}
