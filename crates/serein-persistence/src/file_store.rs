//! `StateStore` respaldado por archivos JSON.
//!
//! Las claves se sanean a `[a-z0-9_-]` para que nunca escapen del
//! directorio de datos. La escritura pasa por un archivo temporal y un
//! rename para no dejar un blob truncado si el proceso muere a mitad.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use serein_core::{CoreError, Result, StateStore};

use crate::config::StoreConfig;

pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Abre (creando si hace falta) el directorio de datos.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| CoreError::Storage(format!("create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    /// Construye desde `SEREIN_DATA_DIR` (o el default).
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env().data_dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key.chars()
                              .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                              .collect();
        self.dir.join(format!("{safe}.json"))
    }

    fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|e| CoreError::Storage(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, path).map_err(|e| CoreError::Storage(format!("rename {}: {e}", path.display())))?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CoreError::Storage(format!("read {}: {e}", path.display()))),
        };
        let value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for(key);
        let bytes = serde_json::to_vec(value)?;
        Self::write_atomic(&path, &bytes)?;
        debug!(key, path = %path.display(), "state saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Storage(format!("remove {}: {e}", path.display()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_sanitized_into_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path()).unwrap();
        store.save("../escape/attempt", &json!(1)).unwrap();
        // el archivo queda dentro del directorio, con la clave saneada
        assert!(dir.path().join("___escape_attempt.json").exists());
        assert_eq!(store.load("../escape/attempt").unwrap(), Some(json!(1)));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path()).unwrap();
        store.remove("never-written").unwrap();
        store.save("k", &json!({"a": true})).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
    }
}
