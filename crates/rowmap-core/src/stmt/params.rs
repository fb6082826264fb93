use super::Value;

use indexmap::IndexMap;

/// Named statement parameters: column name to value, in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params {
    values: IndexMap<String, Value>,
}

/// Starts a parameter set with a single entry.
///
/// ```
/// use rowmap_core::stmt::{params, Value};
///
/// let params = params("ID", 1_i64).param("NAME", "Ada");
/// assert_eq!(params.get("NAME"), Some(&Value::from("Ada")));
/// ```
pub fn params(name: impl Into<String>, value: impl Into<Value>) -> Params {
    Params::new().param(name, value)
}

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    pub fn with_capacity(capacity: usize) -> Params {
        Params {
            values: IndexMap::with_capacity(capacity),
        }
    }

    /// Adds a parameter, builder style. A repeated name replaces the earlier
    /// value in place.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Params {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Params {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
