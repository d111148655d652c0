//! Immutable capture of a key/value configuration source.

use std::collections::HashMap;
use std::env;

use tracing::debug;

/// Immutable copy of key/value configuration data captured at one point in
/// time.
///
/// A snapshot is built once, at accessor construction, and never re-reads
/// its source: mutating the process environment afterwards does not affect
/// accessors already holding a snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    vars: HashMap<String, String>,
}

impl Snapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars: HashMap<String, String> = env::vars_os()
            .filter_map(|(name, value)| {
                Some((name.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();
        debug!(count = vars.len(), "captured environment snapshot");
        Self { vars }
    }

    /// Look up the raw value for a variable name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when the snapshot captured no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Snapshot
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let vars = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { vars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_a_defensive_copy() {
        let mut source = HashMap::new();
        source.insert("HOST".to_string(), "localhost".to_string());

        let snapshot: Snapshot = source.clone().into_iter().collect();
        source.insert("HOST".to_string(), "changed".to_string());
        source.insert("PORT".to_string(), "8080".to_string());

        assert_eq!(snapshot.get("HOST"), Some("localhost"));
        assert_eq!(snapshot.get("PORT"), None);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert_eq!(snapshot.get("ANYTHING"), None);
    }

    #[test]
    fn test_from_process_matches_live_lookup() {
        let snapshot = Snapshot::from_process();
        assert_eq!(snapshot.get("PATH").is_some(), env::var("PATH").is_ok());
    }
}
