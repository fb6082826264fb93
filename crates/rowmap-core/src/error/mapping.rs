use super::Error;

/// Error when reading or writing a record property fails during conversion.
///
/// The underlying failure is attached as the cause.
#[derive(Debug)]
pub(super) struct MappingError {
    type_name: Box<str>,
    property: Box<str>,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to map {}.{}", self.type_name, self.property)
    }
}

impl Error {
    /// Creates a mapping error for a property of a record type.
    ///
    /// Usually attached as context: `cause.context(Error::mapping(..))`.
    pub fn mapping(type_name: &str, property: &str) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            type_name: type_name.into(),
            property: property.into(),
        }))
    }

    /// Returns `true` if this error is a mapping error.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Mapping(_))
    }
}
