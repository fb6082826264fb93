use super::ColumnType;

/// One described property of a record type.
///
/// Properties without a column are not mapped to rows but can still be
/// addressed by name, e.g. when assigning a generated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Identifier used with `Record::read` / `Record::write`
    pub name: String,

    /// External column name, if the property is mapped
    pub column: Option<String>,

    /// True if the property holds (part of) the primary key
    pub primary_key: bool,

    /// Coercion kind of the property
    pub ty: ColumnType,

    /// True if the record exposes a reader for the property
    pub readable: bool,

    /// True if the record exposes a writer for the property
    pub writable: bool,
}

impl Property {
    /// A readable and writable, unmapped property of kind `Other`.
    pub fn new(name: impl Into<String>) -> Property {
        Property {
            name: name.into(),
            column: None,
            primary_key: false,
            ty: ColumnType::Other,
            readable: true,
            writable: true,
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Property {
        self.column = Some(column.into());
        self
    }

    pub fn primary_key(mut self) -> Property {
        self.primary_key = true;
        self
    }

    pub fn ty(mut self, ty: ColumnType) -> Property {
        self.ty = ty;
        self
    }

    pub fn read_only(mut self) -> Property {
        self.writable = false;
        self
    }

    pub fn write_only(mut self) -> Property {
        self.readable = false;
        self
    }

    pub fn is_mapped(&self) -> bool {
        self.column.is_some()
    }
}
