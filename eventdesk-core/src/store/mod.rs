//! Persistent key-value storage.
//!
//! Everything eventdesk keeps (events, users, theme) is a string value under
//! a fixed key. Backends are synchronous and have no transactions.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::EventDeskResult;

/// A durable string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> EventDeskResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> EventDeskResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> EventDeskResult<()>;
}

/// Read a JSON document stored under `key`.
///
/// `Ok(None)` when the key is absent; a serialization error when the value
/// is present but malformed. Callers decide how to recover.
pub fn read_json<T, S>(store: &S, key: &str) -> EventDeskResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> EventDeskResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
