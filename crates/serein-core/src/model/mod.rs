//! Modelo de datos neutral del onboarding: respuestas, contenido y pasos.

pub mod answers;
pub mod content;
pub mod step;

pub use answers::{AnswerMap, AnswerValue};
pub use content::{Benefit, LocalizedString, OptionItem, ResolvedContent, Stat, StepContent};
pub use step::{BranchFn, DynamicContentFn, Edge, Step, StepKind};
