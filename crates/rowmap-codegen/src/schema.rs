mod column;
pub(crate) use column::{Access, Column};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod record;
pub(crate) use record::Record;
