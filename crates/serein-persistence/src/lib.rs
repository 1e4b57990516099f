//! serein-persistence: backend de `StateStore` sobre el sistema de archivos.
//!
//! Un blob JSON por clave (`<dir>/<clave>.json`). Pensado para estado de
//! dispositivo: una sesión de onboarding, favoritos del feed. El volumen de
//! escritura es un blob pequeño por acción de usuario, así que no hay pool
//! ni batching.

pub mod config;
pub mod file_store;

pub use config::{init_dotenv, StoreConfig};
pub use file_store::FileStateStore;
