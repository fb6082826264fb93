mod column;
pub use column::ColumnMetadata;

mod column_type;
pub use column_type::ColumnType;

mod property;
pub use property::Property;

mod type_metadata;
pub use type_metadata::TypeMetadata;
