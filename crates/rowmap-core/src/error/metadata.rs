use super::Error;

/// Error when a record type describes its properties inconsistently.
///
/// This is a defect in the record type (duplicate property or column names,
/// a mapped property with neither reader nor writer), not a data error.
#[derive(Debug)]
pub(super) struct MetadataError {
    type_name: Box<str>,
    message: Box<str>,
}

impl std::error::Error for MetadataError {}

impl core::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid metadata for {}: {}", self.type_name, self.message)
    }
}

impl Error {
    /// Creates a metadata error for the given record type.
    pub fn metadata(type_name: &str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Metadata(MetadataError {
            type_name: type_name.into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a metadata error.
    pub fn is_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Metadata(_))
    }
}
