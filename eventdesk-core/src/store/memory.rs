//! In-memory store, optionally bounded by a byte quota.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{EventDeskError, EventDeskResult};

/// Store backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes once keys plus values would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            values: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn used_bytes(&self) -> usize {
        self.values.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> EventDeskResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EventDeskResult<()> {
        if let Some(quota) = self.quota {
            let replaced = self.values.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let available = quota.saturating_sub(self.used_bytes() - replaced);
            let needed = key.len() + value.len();
            if needed > available {
                return Err(EventDeskError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available,
                });
            }
        }

        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EventDeskResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let mut store = MemoryStore::with_quota(10);
        store.set("ab", "12345678").unwrap();

        let err = store.set("cd", "x").unwrap_err();
        assert!(matches!(err, EventDeskError::QuotaExceeded { needed: 3, available: 0, .. }));

        // Overwriting the same key only counts the difference
        store.set("ab", "87654321").unwrap();
        assert_eq!(store.get("ab").unwrap().as_deref(), Some("87654321"));
        assert_eq!(store.get("cd").unwrap(), None);
    }
}
