use super::ColumnType;

/// A property mapped to a row column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Property identifier on the record
    pub property: String,

    /// Column name in parameter maps and result rows
    pub column: String,

    pub primary_key: bool,

    pub ty: ColumnType,

    pub readable: bool,

    pub writable: bool,
}
