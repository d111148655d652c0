//! Best-effort typed reads over a snapshot.

use std::marker::PhantomData;

use vetch_core::error::{ValueKind, VetchError, VetchResult};
use vetch_core::key::EnvKey;
use vetch_core::parse;

use crate::snapshot::Snapshot;

/// Permissive accessor: absent keys are `None`, malformed values are
/// errors.
///
/// Lookups never require a value to be present, but a present value that
/// cannot be coerced to the requested type is always rejected. Every call
/// re-parses the raw string; nothing is cached.
#[derive(Debug, Clone)]
pub struct LooseEnv<K: EnvKey> {
    snapshot: Snapshot,
    keys: PhantomData<K>,
}

impl<K: EnvKey> LooseEnv<K> {
    /// Wrap a captured snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            keys: PhantomData,
        }
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self::new(Snapshot::from_process())
    }

    /// The raw string value, uncoerced.
    pub fn str(&self, key: K) -> Option<&str> {
        self.snapshot.get(key.as_str())
    }

    /// Classify the value against the truthy/falsy token sets.
    ///
    /// Matching is exact and case-sensitive: `true`, `1`, `yes`, `y`, `on`
    /// are true; `false`, `0`, `no`, `n`, `off` are false; anything else is
    /// a validation error.
    pub fn bool(&self, key: K) -> VetchResult<Option<bool>> {
        let Some(raw) = self.str(key) else {
            return Ok(None);
        };

        if parse::is_truthy(raw) {
            Ok(Some(true))
        } else if parse::is_falsy(raw) {
            Ok(Some(false))
        } else {
            Err(VetchError::invalid(key.as_str(), raw, ValueKind::Bool))
        }
    }

    /// Parse the longest base-10 integer prefix of the value.
    ///
    /// Trailing non-numeric content is ignored, so `8080abc` parses as 8080
    /// and a float literal parses as its integer part.
    pub fn int(&self, key: K) -> VetchResult<Option<i64>> {
        let Some(raw) = self.str(key) else {
            return Ok(None);
        };

        match parse::int_prefix(raw) {
            Some(parsed) => Ok(Some(parsed)),
            None => Err(VetchError::invalid(key.as_str(), raw, ValueKind::Int)),
        }
    }

    /// Parse the longest decimal floating-point prefix of the value.
    pub fn float(&self, key: K) -> VetchResult<Option<f64>> {
        let Some(raw) = self.str(key) else {
            return Ok(None);
        };

        match parse::float_prefix(raw) {
            Some(parsed) => Ok(Some(parsed)),
            None => Err(VetchError::invalid(key.as_str(), raw, ValueKind::Float)),
        }
    }

    /// The snapshot backing this accessor.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetch_core::env_keys;

    env_keys! {
        enum TestVar { PORT, HOST, DEBUG, LOG_LEVEL, SAMPLE_RATE }
    }

    fn populated() -> LooseEnv<TestVar> {
        LooseEnv::new(
            [
                ("PORT", "8080"),
                ("HOST", "localhost"),
                ("DEBUG", "true"),
                ("LOG_LEVEL", "debug"),
                ("SAMPLE_RATE", "0.5"),
            ]
            .into_iter()
            .collect(),
        )
    }

    fn empty() -> LooseEnv<TestVar> {
        LooseEnv::new(Snapshot::default())
    }

    #[test]
    fn test_str_returns_raw_value() {
        assert_eq!(populated().str(TestVar::HOST), Some("localhost"));
    }

    #[test]
    fn test_absent_key_is_none_for_every_type() {
        let env = empty();
        assert_eq!(env.str(TestVar::HOST), None);
        assert_eq!(env.bool(TestVar::DEBUG), Ok(None));
        assert_eq!(env.int(TestVar::PORT), Ok(None));
        assert_eq!(env.float(TestVar::SAMPLE_RATE), Ok(None));
    }

    #[test]
    fn test_bool_classifies_tokens() {
        let env: LooseEnv<TestVar> = LooseEnv::new(
            [("DEBUG", "on"), ("LOG_LEVEL", "off")].into_iter().collect(),
        );
        assert_eq!(env.bool(TestVar::DEBUG), Ok(Some(true)));
        assert_eq!(env.bool(TestVar::LOG_LEVEL), Ok(Some(false)));
    }

    #[test]
    fn test_bool_rejects_unrecognized_token() {
        let err = populated().bool(TestVar::PORT).unwrap_err();
        assert_eq!(err, VetchError::invalid("PORT", "8080", ValueKind::Bool));
    }

    #[test]
    fn test_int_parses_prefix() {
        let env = populated();
        assert_eq!(env.int(TestVar::PORT), Ok(Some(8080)));
        assert_eq!(env.int(TestVar::SAMPLE_RATE), Ok(Some(0)));
    }

    #[test]
    fn test_int_rejects_non_numeric() {
        let env = populated();
        assert_eq!(
            env.int(TestVar::LOG_LEVEL),
            Err(VetchError::invalid("LOG_LEVEL", "debug", ValueKind::Int))
        );
        assert_eq!(
            env.int(TestVar::DEBUG),
            Err(VetchError::invalid("DEBUG", "true", ValueKind::Int))
        );
    }

    #[test]
    fn test_float_parses_value() {
        let env = populated();
        assert_eq!(env.float(TestVar::SAMPLE_RATE), Ok(Some(0.5)));
        assert_eq!(env.float(TestVar::PORT), Ok(Some(8080.0)));
    }

    #[test]
    fn test_float_rejects_non_numeric() {
        assert_eq!(
            populated().float(TestVar::LOG_LEVEL),
            Err(VetchError::invalid("LOG_LEVEL", "debug", ValueKind::Float))
        );
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let env = populated();
        assert_eq!(env.int(TestVar::PORT), env.int(TestVar::PORT));
        assert_eq!(env.bool(TestVar::DEBUG), env.bool(TestVar::DEBUG));
        assert_eq!(env.str(TestVar::HOST), env.str(TestVar::HOST));
    }
}
