use super::Error;

/// Error when a key generator cannot produce a key.
#[derive(Debug)]
pub(super) struct KeyGenerationError {
    message: Box<str>,
}

impl std::error::Error for KeyGenerationError {}

impl core::fmt::Display for KeyGenerationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "key generation failed: {}", self.message)
    }
}

impl Error {
    /// Creates a key generation error.
    pub fn key_generation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::KeyGeneration(KeyGenerationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a key generation error.
    pub fn is_key_generation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KeyGeneration(_))
    }
}
