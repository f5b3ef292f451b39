use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Error;
use crate::model::LoadReport;
use crate::parser::parse_str;

/// Conventional source filename, resolved relative to the application root.
pub const DEFAULT_FILE: &str = ".env";

/// Load [`DEFAULT_FILE`] from the current working directory into a new store.
pub fn dotenv() -> Result<EnvStore, Error> {
    EnvStore::from_path(DEFAULT_FILE)
}

/// In-memory container for environment variables.
///
/// Keys are unique, case-sensitive, non-empty strings; values are arbitrary
/// strings. The store is process-isolated: it never touches the real process
/// environment. Use the [`crate::process`] adapter when that integration is
/// wanted.
///
/// The store is not internally synchronized. Sharing one instance across
/// threads requires external locking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvStore {
    entries: BTreeMap<String, String>,
}

impl EnvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store eagerly loaded from an explicit source file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut store = Self::new();
        store.load_path(path)?;
        Ok(store)
    }

    /// Create a store eagerly loaded from `<root>/.env`.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_path(root.as_ref().join(DEFAULT_FILE))
    }

    /// Load entries from a `KEY=VALUE` file into the store.
    ///
    /// The whole file is read and parsed before anything is installed, so a
    /// failed load leaves the store untouched. An unreadable file and a
    /// malformed line are both hard errors. Entries are installed in file
    /// order via [`EnvStore::set`], so for a repeated key the last occurrence
    /// wins.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = std::str::from_utf8(&bytes)?;
        let entries = parse_str(content)?;

        let loaded = entries.len();
        for entry in entries {
            self.set(entry.key, entry.value);
        }

        Ok(LoadReport { loaded })
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up the value stored for `key`, falling back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Insert or overwrite the entry for `key`, returning the stored value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &str {
        let slot = self.entries.entry(key.into()).or_default();
        *slot = value.into();
        slot
    }

    /// Merge a collection of pairs into the store.
    ///
    /// Every key present in `entries` is inserted or overwritten; keys absent
    /// from it are left untouched.
    pub fn set_many<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Remove the entry for `key` and return its value.
    ///
    /// Fails with [`Error::KeyNotFound`] if the store holds no such key; the
    /// store is unchanged in that case.
    pub fn unset(&mut self, key: &str) -> Result<String, Error> {
        self.entries
            .remove(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Whether the store currently holds `key`.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.set_many(iter);
        store
    }
}
