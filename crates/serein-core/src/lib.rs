//! serein-core: motor de onboarding (grafo de pasos + sesión persistida)
//!
//! Dos piezas componen el núcleo:
//! - `FlowDefinition`: colección estática e inmutable de pasos que forman un
//!   grafo dirigido. Sin estado; expone lookups totales y resolución de
//!   ramas (`Edge::Branch`).
//! - `OnboardingSession`: máquina de estados de recorrido, persistida como un
//!   único blob JSON en cada mutación a través del seam `StateStore`.
//!
//! Diseño resumido:
//! - Funciones totales: un id desconocido degrada al centinela terminal,
//!   nunca a un panic. El peor caso es una pantalla repetida, no un crash.
//! - Las ramas y el contenido dinámico son punteros `fn` puros sobre el
//!   mapa de respuestas; la definición queda `Clone` y testeable aislada
//!   del renderer.
//! - La persistencia es fire-and-forget: un fallo de guardado se registra
//!   y la transición sigue adelante.
pub mod constants;
pub mod definition;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod session;
pub mod store;

pub use constants::TERMINAL_STEP_ID;
pub use definition::{FlowBuilder, FlowDefinition};
pub use errors::{CoreError, Result};
pub use model::{AnswerMap, AnswerValue, Benefit, Edge, LocalizedString, OptionItem, ResolvedContent, Stat, Step, StepContent, StepKind};
pub use session::{OnboardingSession, SessionState};
pub use store::{InMemoryStateStore, StateStore};
