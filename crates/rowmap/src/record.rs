mod primitive;
pub use primitive::Primitive;

use rowmap_core::{schema::Property, stmt::Value, Result};

/// A record type that can be converted to and from rows.
///
/// Usually implemented with `#[derive(Record)]`; a hand-written impl is the
/// explicit registration form. `properties` must describe the same property
/// set on every call.
pub trait Record: Default + 'static {
    /// Fully-qualified type name, e.g. `app::dao::Person`.
    fn type_name() -> &'static str;

    /// Describes the record's properties.
    fn properties() -> Vec<Property>;

    /// Reads the named property.
    fn read(&self, property: &str) -> Result<Value>;

    /// Writes the named property. A value whose runtime type the property
    /// cannot hold fails with a type conversion error.
    fn write(&mut self, property: &str, value: Value) -> Result<()>;
}
