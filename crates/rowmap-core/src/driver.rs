mod executor;
pub use executor::Executor;

mod row;
pub use row::Row;
