use super::Owner;

use rowmap_core::Result;
use std::{
    any::TypeId,
    borrow::Cow,
    collections::HashMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// Environment variable naming the root directory of [`FsResources::from_env`].
pub const SQL_ROOT_ENV: &str = "ROWMAP_SQL_ROOT";

/// Reads statement text owned by a type.
pub trait Resources: fmt::Debug + Send + Sync + 'static {
    /// Returns the text at `path`, relative to `owner`, or `None` if there is
    /// no such resource.
    fn read(&self, owner: &Owner, path: &str) -> Result<Option<String>>;
}

/// Resources on the file system, laid out by the owner's module path below a
/// root directory.
#[derive(Debug, Clone)]
pub struct FsResources {
    root: PathBuf,
}

impl FsResources {
    pub fn new(root: impl AsRef<Path>) -> FsResources {
        FsResources {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Rooted at `$ROWMAP_SQL_ROOT`, or the working directory when unset.
    pub fn from_env() -> FsResources {
        match std::env::var_os(SQL_ROOT_ENV) {
            Some(root) => FsResources::new(root),
            None => FsResources::new("."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, owner: &Owner, path: &str) -> PathBuf {
        self.root.join(owner.module_dir()).join(path)
    }
}

impl Resources for FsResources {
    fn read(&self, owner: &Owner, path: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.resolve(owner, path)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Resources held in memory, e.g. bundled with `include_str!`.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedResources {
    entries: HashMap<(TypeId, String), Cow<'static, str>>,
}

impl EmbeddedResources {
    pub fn new() -> EmbeddedResources {
        EmbeddedResources::default()
    }

    /// Registers `text` at `path` for owner `O`, builder style.
    pub fn with<O: ?Sized + 'static>(
        mut self,
        path: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) -> EmbeddedResources {
        self.insert::<O>(path, text);
        self
    }

    pub fn insert<O: ?Sized + 'static>(
        &mut self,
        path: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) {
        self.entries
            .insert((TypeId::of::<O>(), path.into()), text.into());
    }
}

impl Resources for EmbeddedResources {
    fn read(&self, owner: &Owner, path: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(&(owner.type_id(), path.to_string()))
            .map(|text| text.to_string()))
    }
}
