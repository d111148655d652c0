//! Required typed reads with optional per-call defaults.

use vetch_core::error::{VetchError, VetchResult};
use vetch_core::key::EnvKey;

use crate::loose::LooseEnv;
use crate::snapshot::Snapshot;

/// Strict accessor: a usable typed value or a clear failure.
///
/// The default entry point for configuration reads. Each getter returns the
/// parsed value, the supplied default when the variable is absent, or a
/// missing-variable error when neither is available. A validation failure
/// from the underlying read always propagates unchanged; a default never
/// papers over a malformed value.
///
/// The accessor owns a [`LooseEnv`] over the same snapshot, reachable via
/// [`Env::loose`] for call sites that want to observe absence instead of
/// failing.
#[derive(Debug, Clone)]
pub struct Env<K: EnvKey> {
    loose: LooseEnv<K>,
}

impl<K: EnvKey> Env<K> {
    /// Wrap a captured snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            loose: LooseEnv::new(snapshot),
        }
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self::new(Snapshot::from_process())
    }

    /// The permissive accessor over the same snapshot.
    pub fn loose(&self) -> &LooseEnv<K> {
        &self.loose
    }

    /// The raw string value.
    pub fn str(&self, key: K) -> VetchResult<&str> {
        self.loose
            .str(key)
            .ok_or_else(|| VetchError::missing(key.as_str()))
    }

    /// The raw string value, or `default` when the variable is absent.
    ///
    /// Infallible: string reads cannot fail validation.
    pub fn str_or<'a>(&'a self, key: K, default: &'a str) -> &'a str {
        self.loose.str(key).unwrap_or(default)
    }

    /// Parse a boolean variable.
    pub fn bool(&self, key: K) -> VetchResult<bool> {
        self.loose
            .bool(key)?
            .ok_or_else(|| VetchError::missing(key.as_str()))
    }

    /// Parse a boolean variable, or `default` when absent.
    pub fn bool_or(&self, key: K, default: bool) -> VetchResult<bool> {
        Ok(self.loose.bool(key)?.unwrap_or(default))
    }

    /// Parse an integer variable.
    pub fn int(&self, key: K) -> VetchResult<i64> {
        self.loose
            .int(key)?
            .ok_or_else(|| VetchError::missing(key.as_str()))
    }

    /// Parse an integer variable, or `default` when absent.
    pub fn int_or(&self, key: K, default: i64) -> VetchResult<i64> {
        Ok(self.loose.int(key)?.unwrap_or(default))
    }

    /// Parse a floating-point variable.
    pub fn float(&self, key: K) -> VetchResult<f64> {
        self.loose
            .float(key)?
            .ok_or_else(|| VetchError::missing(key.as_str()))
    }

    /// Parse a floating-point variable, or `default` when absent.
    pub fn float_or(&self, key: K, default: f64) -> VetchResult<f64> {
        Ok(self.loose.float(key)?.unwrap_or(default))
    }
}

impl<K: EnvKey> From<LooseEnv<K>> for Env<K> {
    fn from(loose: LooseEnv<K>) -> Self {
        Self { loose }
    }
}
