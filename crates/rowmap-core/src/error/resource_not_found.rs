use super::Error;

/// Error when a statement is found neither in the dialect-specific nor in the
/// dialect-independent location.
#[derive(Debug)]
pub(super) struct ResourceNotFoundError {
    owner: Box<str>,
    name: Box<str>,
}

impl std::error::Error for ResourceNotFoundError {}

impl core::fmt::Display for ResourceNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unable to load SQL resource; owner={}, name={}",
            self.owner, self.name
        )
    }
}

impl Error {
    /// Creates a missing statement resource error.
    pub fn resource_not_found(owner: &str, name: &str) -> Error {
        Error::from(super::ErrorKind::ResourceNotFound(ResourceNotFoundError {
            owner: owner.into(),
            name: name.into(),
        }))
    }

    /// Returns `true` if this error is a missing resource error.
    pub fn is_resource_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ResourceNotFound(_))
    }
}
