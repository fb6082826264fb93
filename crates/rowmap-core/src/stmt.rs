mod num;

mod params;
pub use params::{params, Params};

mod value;
pub use value::Value;
