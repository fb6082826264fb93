use super::Error;

/// Error raised by a row accessor, e.g. the requested column is absent.
#[derive(Debug)]
pub(super) struct RowAccessError {
    column: Box<str>,
    inner: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::error::Error for RowAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_ref()
            .map(|inner| inner.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for RowAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to read column `{}`", self.column)?;
        if let Some(inner) = &self.inner {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a row access error for `column`, optionally wrapping the
    /// adapter's error.
    pub fn row_access<E>(column: &str, inner: Option<E>) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::from(super::ErrorKind::RowAccess(RowAccessError {
            column: column.into(),
            inner: inner.map(|err| Box::new(err) as Box<dyn std::error::Error + Send + Sync>),
        }))
    }

    /// Returns `true` if this error is a row access error.
    pub fn is_row_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RowAccess(_))
    }
}
