//! Seam de persistencia clave→blob JSON.
//!
//! La sesión serializa exactamente su estado (nunca valores derivados) y lo
//! guarda bajo una clave en cada mutación. El contrato es deliberadamente
//! mínimo — `load`/`save`/`remove` — para que el backend sea intercambiable
//! (memoria en tests, archivos en `serein-persistence`).

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::{CoreError, Result};

pub trait StateStore {
    /// `Ok(None)` cuando la clave no existe; ausencia no es error.
    fn load(&self, key: &str) -> Result<Option<Value>>;
    fn save(&self, key: &str, value: &Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Implementación en memoria para tests y demos.
pub struct InMemoryStateStore {
    inner: Mutex<HashMap<String, Value>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self { inner: Mutex::new(HashMap::new()) }
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let map = self.inner
                      .lock()
                      .map_err(|e| CoreError::Storage(format!("mutex poisoned: {e:?}")))?;
        Ok(map.get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let mut map = self.inner
                          .lock()
                          .map_err(|e| CoreError::Storage(format!("mutex poisoned: {e:?}")))?;
        map.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.inner
                          .lock()
                          .map_err(|e| CoreError::Storage(format!("mutex poisoned: {e:?}")))?;
        map.remove(key);
        Ok(())
    }
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_absent_key_is_none_not_error() {
        let store = InMemoryStateStore::new();
        assert!(store.load("missing").unwrap().is_none());
    }

    #[test]
    fn save_then_load_then_remove() {
        let store = InMemoryStateStore::new();
        store.save("k", &json!({"n": 1})).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(json!({"n": 1})));
        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
    }
}
