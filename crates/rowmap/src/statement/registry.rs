use super::{Dialect, FsResources, Owner, Resources, StatementLoader};

use parking_lot::Mutex;
use rowmap_core::Result;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock},
};

static GLOBAL: OnceLock<LoaderRegistry> = OnceLock::new();

/// Identifies a [`StatementLoader`]: one per owner type and dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderKey {
    pub owner: TypeId,
    pub dialect: Dialect,
}

/// Hands out one shared [`StatementLoader`] per [`LoaderKey`].
///
/// Every access goes through a single mutex, so concurrent first requests for
/// a key create exactly one loader.
#[derive(Debug)]
pub struct LoaderRegistry {
    resources: Arc<dyn Resources>,
    loaders: Mutex<HashMap<LoaderKey, Arc<StatementLoader>>>,
}

impl LoaderRegistry {
    pub fn new(resources: impl Resources) -> LoaderRegistry {
        LoaderRegistry {
            resources: Arc::new(resources),
            loaders: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    ///
    /// Unless [`init_global`](Self::init_global) ran first, it reads from
    /// [`FsResources::from_env`].
    pub fn global() -> &'static LoaderRegistry {
        GLOBAL.get_or_init(|| LoaderRegistry::new(FsResources::from_env()))
    }

    /// Sets up the process-wide registry. Fails if it already exists.
    pub fn init_global(resources: impl Resources) -> Result<()> {
        GLOBAL
            .set(LoaderRegistry::new(resources))
            .map_err(|_| rowmap_core::err!("global statement loader registry is already initialized"))
    }

    /// Returns the loader for statements owned by `O` in `dialect`.
    pub fn loader<O: ?Sized + 'static>(&self, dialect: Dialect) -> Arc<StatementLoader> {
        let owner = Owner::of::<O>();
        let key = LoaderKey {
            owner: owner.type_id(),
            dialect,
        };

        let mut loaders = self.loaders.lock();

        loaders
            .entry(key)
            .or_insert_with(|| {
                tracing::debug!(owner = owner.type_name(), %dialect, "created statement loader");
                Arc::new(StatementLoader::new(owner, dialect, self.resources.clone()))
            })
            .clone()
    }

    /// Number of loaders created so far.
    pub fn len(&self) -> usize {
        self.loaders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.lock().is_empty()
    }
}
