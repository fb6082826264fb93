mod params;
pub use params::{as_batch_values, ParamsMapper};

mod row;
pub use row::{FieldFailure, Mapped, RowMapper};
