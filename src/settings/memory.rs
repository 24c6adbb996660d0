use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{SettingsError, SettingsStore};

/// In-memory settings map.
///
/// Clones share the same map, so a test can keep a handle after giving one
/// to a store. Counts writes so callers can assert when persistence
/// happened, and can be switched to read-only to simulate a failing backend.
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    inner: Arc<RwLock<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a write.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.inner
            .write()
            .expect("settings lock poisoned")
            .values
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls so far, across all clones.
    pub fn writes(&self) -> usize {
        self.inner.read().expect("settings lock poisoned").writes
    }

    /// Make every subsequent `set` fail with `SettingsError::ReadOnly`.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.write().expect("settings lock poisoned").read_only = read_only;
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self
            .inner
            .read()
            .expect("settings lock poisoned")
            .values
            .get(key)
            .cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut inner = self.inner.write().expect("settings lock poisoned");
        if inner.read_only {
            return Err(SettingsError::ReadOnly);
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let settings = MemorySettings::new();
        assert_eq!(settings.get("nope").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let mut settings = MemorySettings::new();
        settings.set("k", "v").unwrap();
        assert_eq!(settings.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(settings.writes(), 1);
    }

    #[test]
    fn clones_share_values_and_counters() {
        let observer = MemorySettings::new();
        let mut writer = observer.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(observer.writes(), 1);

        observer.set_read_only(true);
        assert!(writer.set("k", "w").is_err());
    }

    #[test]
    fn read_only_keeps_previous_value() {
        let mut settings = MemorySettings::new().with_value("k", "old");
        settings.set_read_only(true);
        assert!(matches!(
            settings.set("k", "new"),
            Err(SettingsError::ReadOnly)
        ));
        assert_eq!(settings.get("k").unwrap().as_deref(), Some("old"));
        assert_eq!(settings.writes(), 0);
    }
}
