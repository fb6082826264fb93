use super::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error reported by a database adapter, kept as-is for downcasting.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) inner: BoxError,
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Wraps an adapter error (rusqlite, a URL parse failure, ..).
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }

    /// The adapter error of the first driver error in the context chain.
    ///
    /// ```
    /// # use rowmap_core::Error;
    /// let err = Error::driver(std::fmt::Error).context(Error::key_generation("key query failed"));
    /// assert!(err.driver_error().unwrap().is::<std::fmt::Error>());
    /// ```
    pub fn driver_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::Driver(driver) => Some(driver.inner.as_ref()),
            _ => None,
        })
    }
}
