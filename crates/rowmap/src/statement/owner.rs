use std::any::{self, TypeId};

/// Identity of the type statements are loaded for.
///
/// Names are taken from [`std::any::type_name`] with any generic argument list
/// removed, so `dao::Dao<dao::Person>` resolves like `dao::Dao`. The format of
/// `type_name` is not guaranteed by std; the resource layout assumes the
/// `crate::module::Type` form current compilers produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Owner {
    type_id: TypeId,
    type_name: &'static str,
}

impl Owner {
    pub fn of<O: ?Sized + 'static>() -> Owner {
        Owner {
            type_id: TypeId::of::<O>(),
            type_name: strip_generics(any::type_name::<O>()),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Rust path of the owner without generic arguments, e.g.
    /// `app::dao::PersonDao`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Dotted name of the owner, e.g. `app.dao.PersonDao`.
    pub fn qualified_name(&self) -> String {
        self.type_name.replace("::", ".")
    }

    /// Module path of the owner as a relative directory, e.g. `app/dao`.
    pub fn module_dir(&self) -> String {
        match self.type_name.rsplit_once("::") {
            Some((module, _)) => module.replace("::", "/"),
            None => String::new(),
        }
    }
}

fn strip_generics(name: &str) -> &str {
    match name.find('<') {
        Some(end) => &name[..end],
        None => name,
    }
}
