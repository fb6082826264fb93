mod adhoc;
mod driver;
mod key_assignment;
mod key_generation;
mod mapping;
mod metadata;
mod resource_not_found;
mod row_access;
mod type_conversion;

use adhoc::AdhocError;
use driver::DriverError;
use key_assignment::KeyAssignmentError;
use key_generation::KeyGenerationError;
use mapping::MappingError;
use metadata::MetadataError;
use resource_not_found::ResourceNotFoundError;
use row_access::RowAccessError;
use std::sync::Arc;
use type_conversion::TypeConversionError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while mapping records, generating keys or loading
/// statements.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// The consequent becomes the outermost error and `self` its cause. Context
    /// is displayed outermost first, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        match err.inner.as_mut().and_then(Arc::get_mut) {
            Some(inner) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.cause = Some(self);
            }
            None => panic!("consequent error must not be shared"),
        }
        err
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.cause() {
            err = cause;
        }
        err
    }

    /// Returns the error this one was attached to as context, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(cause) = self.cause() {
            return Some(cause);
        }

        match self.kind() {
            ErrorKind::Driver(err) => Some(err.inner.as_ref()),
            ErrorKind::RowAccess(err) => std::error::Error::source(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    TypeConversion(TypeConversionError),
    Metadata(MetadataError),
    Mapping(MappingError),
    RowAccess(RowAccessError),
    KeyGeneration(KeyGenerationError),
    KeyAssignment(KeyAssignmentError),
    ResourceNotFound(ResourceNotFoundError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Metadata(err) => core::fmt::Display::fmt(err, f),
            Mapping(err) => core::fmt::Display::fmt(err, f),
            RowAccess(err) => core::fmt::Display::fmt(err, f),
            KeyGeneration(err) => core::fmt::Display::fmt(err, f),
            KeyAssignment(err) => core::fmt::Display::fmt(err, f),
            ResourceNotFound(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let chained = root.context(err!("middle")).context(err!("top"));
        assert_eq!(chained.to_string(), "top: middle: root cause");
    }

    #[test]
    fn root_walks_to_innermost() {
        let chained = err!("root").context(Error::key_generation("no rows"));
        assert!(chained.is_key_generation());
        assert_eq!(chained.root().to_string(), "root");
        assert_eq!(chained.cause().unwrap().to_string(), "root");
    }

    #[test]
    fn source_follows_context_chain() {
        use std::error::Error as _;

        let chained = err!("disk on fire").context(Error::key_assignment("Person"));
        let source = chained.source().unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn anyhow_bridge() {
        let our_err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn io_error_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let our_err: Error = io_err.into();
        assert!(our_err.to_string().contains("file not found"));
    }

    #[test]
    fn metadata_error() {
        let err = Error::metadata("app::Person", "duplicate column `NAME`");
        assert!(err.is_metadata());
        assert_eq!(
            err.to_string(),
            "invalid metadata for app::Person: duplicate column `NAME`"
        );
    }

    #[test]
    fn mapping_error_wraps_cause() {
        let err = Error::type_conversion(crate::stmt::Value::I64(1), "String")
            .context(Error::mapping("app::Person", "name"));
        assert!(err.is_mapping());
        assert!(!err.is_type_conversion());
        assert!(err.root().is_type_conversion());
        assert_eq!(
            err.to_string(),
            "failed to map app::Person.name: cannot convert I64 to String"
        );
    }

    #[test]
    fn row_access_error() {
        let err = Error::row_access("FIRST_NAME", None::<std::io::Error>);
        assert!(err.is_row_access());
        assert_eq!(err.to_string(), "failed to read column `FIRST_NAME`");
    }

    #[test]
    fn resource_not_found_names_owner_and_statement() {
        let err = Error::resource_not_found("app.dao.PersonDao", "load_people");
        assert!(err.is_resource_not_found());
        assert_eq!(
            err.to_string(),
            "unable to load SQL resource; owner=app.dao.PersonDao, name=load_people"
        );
    }

    #[test]
    fn key_generation_error() {
        let err = Error::key_generation("expected 1 row, got 0");
        assert!(err.is_key_generation());
        assert_eq!(err.to_string(), "key generation failed: expected 1 row, got 0");
    }

    #[test]
    fn key_assignment_error() {
        let err = Error::key_assignment("app::Person");
        assert!(err.is_key_assignment());
        assert_eq!(
            err.to_string(),
            "error assigning a new primary key value to app::Person"
        );
    }
}
