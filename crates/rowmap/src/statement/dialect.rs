use rowmap_core::{Error, Result};

use std::{fmt, str::FromStr};

/// Database family a statement is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Dialect {
    Oracle,
    Hsqldb,
    Postgres,
}

impl Dialect {
    /// Lowercase name used as the resource directory.
    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Oracle => "oracle",
            Dialect::Hsqldb => "hsqldb",
            Dialect::Postgres => "postgres",
        }
    }

    /// Whether loaded statements get an instrumentation comment naming their
    /// owner.
    pub const fn supports_inline_comments(self) -> bool {
        matches!(self, Dialect::Oracle)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Dialect> {
        [Dialect::Oracle, Dialect::Hsqldb, Dialect::Postgres]
            .into_iter()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| rowmap_core::err!("unknown SQL dialect `{s}`"))
    }
}
