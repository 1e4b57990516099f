//! Errores del core (taxonomía deliberadamente estrecha).
//!
//! Los lookups del grafo son funciones totales: "no encontrado" degrada al
//! centinela terminal y nunca llega aquí. Sólo la capa de persistencia
//! produce errores reales.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("storage: {0}")] Storage(String),
    #[error("serde: {0}")] Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
