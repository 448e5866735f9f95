//! Environment sources: `.env` files and the process environment.
//!
//! An [`EnvSource`] is a case-insensitive key/value view that settings are
//! read from. Keys are stored upper-cased; values are kept verbatim.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use super::error::ConfigError;

/// Merged key/value pairs that settings are parsed from.
#[derive(Clone, Default)]
pub struct EnvSource {
    values: HashMap<String, String>,
}

// Values may hold secrets, so only keys are printed.
impl fmt::Debug for EnvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("EnvSource").field("keys", &keys).finish()
    }
}

impl EnvSource {
    /// Build a source from explicit pairs. Later pairs win on duplicate keys.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (normalize_key(key.as_ref()), value.into()))
            .collect();
        Self { values }
    }

    /// Parse a `KEY="value"` file.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let to_error = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let iter = dotenvy::from_path_iter(path).map_err(to_error)?;
        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(to_error)?;
            values.insert(normalize_key(&key), value);
        }

        Ok(Self { values })
    }

    /// Snapshot of the current process environment.
    pub fn from_process_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    /// Load `path` (when present) and overlay the process environment on top.
    ///
    /// A missing file is only an error when `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let file = if path.exists() {
            Self::from_env_file(path)?
        } else if required {
            return Err(ConfigError::MissingEnvFile(path.to_path_buf()));
        } else {
            Self::default()
        };

        Ok(file.overlay(Self::from_process_env()))
    }

    /// Merge `other` on top of `self`; keys present in both take `other`'s value.
    pub fn overlay(mut self, other: EnvSource) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Raw value for `key`, if present (possibly empty).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }

    /// Trimmed value for `key`; blank values count as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_uppercase()
}
