//! serein-flows: flujo de onboarding concreto de Serein.
//!
//! Este crate contiene datos, no mecanismo: el grafo de 24 pantallas de la
//! app de meditación (contenido FR/EN, la rama de `experience_meditation` y
//! el resolver dinámico de `barrier_response`), más selectores derivados de
//! respuestas. El motor vive en `serein-core`.

pub mod selectors;
pub mod serein;

pub use selectors::{interpolate_name, reminder_slot, time_commitment, user_name};
pub use serein::{serein_flow, SEREIN_FLOW};
