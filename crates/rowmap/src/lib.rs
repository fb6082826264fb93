//! Metadata-driven mapping between record types and database rows.
//!
//! Record types describe their properties through [`Record`], usually with
//! `#[derive(Record)]`:
//!
//! ```
//! use rowmap::{ParamsMapper, Record};
//!
//! #[derive(Debug, Default, Record)]
//! struct Person {
//!     #[key]
//!     #[column("ID")]
//!     id: i64,
//!
//!     #[column("NAME")]
//!     name: String,
//!
//!     #[skip]
//!     dirty: bool,
//! }
//!
//! let person = Person { id: 7, name: "Ada".into(), dirty: true };
//! let params = ParamsMapper::new().to_params(&person).unwrap();
//!
//! assert_eq!(params.get("ID"), Some(&rowmap::Value::I64(7)));
//! assert_eq!(params.get("NAME"), Some(&rowmap::Value::from("Ada")));
//! ```

extern crate self as rowmap;

pub mod key;
pub use key::{KeyAssigner, KeyGenerator};

mod mapper;
pub use mapper::{as_batch_values, FieldFailure, Mapped, ParamsMapper, RowMapper};

mod metadata;
pub use metadata::MetadataIndex;

mod record;
pub use record::{Primitive, Record};

pub mod statement;
pub use statement::{Dialect, LoaderRegistry, StatementLoader};

pub use rowmap_core::{
    bail, err,
    schema::{self, ColumnType},
    stmt::{params, Params, Value},
    Error, Executor, Result, Row,
};

pub use rowmap_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Primitive, Record};
    pub use rowmap_core::{
        schema::{ColumnType, Property},
        stmt::Value,
        Error, Result,
    };
}
