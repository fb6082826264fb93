use super::Error;

/// Error when a generated key cannot be written into a record.
#[derive(Debug)]
pub(super) struct KeyAssignmentError {
    type_name: Box<str>,
}

impl std::error::Error for KeyAssignmentError {}

impl core::fmt::Display for KeyAssignmentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "error assigning a new primary key value to {}",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a key assignment error for the given record type.
    pub fn key_assignment(type_name: &str) -> Error {
        Error::from(super::ErrorKind::KeyAssignment(KeyAssignmentError {
            type_name: type_name.into(),
        }))
    }

    /// Returns `true` if this error is a key assignment error.
    pub fn is_key_assignment(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KeyAssignment(_))
    }
}
