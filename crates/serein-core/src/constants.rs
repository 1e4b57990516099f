//! Constantes compartidas del motor.

/// Centinela terminal: un `Edge` que resuelve a este id marca el fin del
/// recorrido. No existe como paso dentro de la definición.
pub const TERMINAL_STEP_ID: &str = "__flow_end__";

/// Versión del motor; entra en el fingerprint de la definición.
pub const ENGINE_VERSION: u32 = 1;

/// Clave de almacenamiento por defecto de la sesión de onboarding.
pub const DEFAULT_SESSION_KEY: &str = "onboarding-session";
