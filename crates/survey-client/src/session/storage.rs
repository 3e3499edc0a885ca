//! Key-value storage capability backing the session

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use super::Error;

/// String key-value store with `localStorage` semantics
///
/// Each call touches a single key and is atomic on its own; there are no
/// transactions spanning keys.
pub trait SessionStorage: Send + Sync + Debug {
    /// Whether this environment has storage at all
    ///
    /// Session helpers treat an unavailable store as "logged out" and never
    /// redirect on its behalf.
    fn is_available(&self) -> bool {
        true
    }

    /// Read a value
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Remove a value; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `items`
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or_default()
    }

    /// `true` when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let items = self.items.read().map_err(|_| Error::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut items = self.items.write().map_err(|_| Error::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut items = self.items.write().map_err(|_| Error::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// Storage for environments without one, e.g. server-side rendering
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl SessionStorage for UnavailableStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, Error> {
        Err(Error::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), Error> {
        Err(Error::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), Error> {
        Err(Error::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set_item("userId", "42").expect("set");
        assert_eq!(storage.get_item("userId").expect("get"), Some("42".to_string()));

        storage.set_item("userId", "43").expect("overwrite");
        assert_eq!(storage.get_item("userId").expect("get"), Some("43".to_string()));
        assert_eq!(storage.len(), 1);

        storage.remove_item("userId").expect("remove");
        storage.remove_item("userId").expect("second remove is fine");
        assert_eq!(storage.get_item("userId").expect("get"), None);
    }

    #[test]
    fn test_memory_storage_with_items() {
        let storage = MemoryStorage::with_items([("token", "t"), ("user", "{}")]);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get_item("token").expect("get"), Some("t".to_string()));
    }

    #[test]
    fn test_unavailable_storage() {
        let storage = UnavailableStorage;
        assert!(!storage.is_available());
        assert!(matches!(storage.get_item("token"), Err(Error::Unavailable)));
        assert!(matches!(storage.set_item("token", "x"), Err(Error::Unavailable)));
        assert!(matches!(storage.remove_item("token"), Err(Error::Unavailable)));
    }
}
