/// Coercion kind used when reading a column out of a row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Read as a 64-bit integer
    Integer,

    /// Read as a string
    Text,

    /// Read as whatever the row holds and hand it to the writer unchanged
    #[default]
    Other,
}
