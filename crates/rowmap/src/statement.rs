//! Externalized SQL statements.
//!
//! Statements live next to the type that owns them:
//!
//! * `sql/<statement>.sql` holds SQL common to all databases.
//! * `sql/<dialect>/<statement>.sql` holds SQL for one database, where
//!   `<dialect>` is `oracle`, `hsqldb` or `postgres`.
//!
//! The dialect-specific file wins when both exist. For example, with an owner
//! `app::dao::PersonDao` and file-system resources rooted at `resources/`:
//!
//! * `resources/app/dao/sql/load_people.sql`
//! * `resources/app/dao/sql/oracle/update_people.sql`

mod dialect;
pub use dialect::Dialect;

mod loader;
pub use loader::StatementLoader;

mod owner;
pub use owner::Owner;

mod registry;
pub use registry::{LoaderKey, LoaderRegistry};

mod resources;
pub use resources::{EmbeddedResources, FsResources, Resources, SQL_ROOT_ENV};
