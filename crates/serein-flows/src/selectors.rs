//! Selectores derivados de respuestas del flujo Serein.
//!
//! Lecturas puras sobre el mapa de respuestas con los defaults de producto:
//! el resto de la app los consume sin conocer los ids de paso.

use serein_core::AnswerMap;

/// Prénom capturado en `name_input`; cadena vacía si se saltó el paso.
pub fn user_name(answers: &AnswerMap) -> &str {
    answers.get("name_input").and_then(|v| v.as_single()).unwrap_or("")
}

/// Compromiso diario elegido; default de producto "5min" (la opción
/// recomendada) si no contestó.
pub fn time_commitment(answers: &AnswerMap) -> &str {
    answers.get("time_commitment").and_then(|v| v.as_single()).unwrap_or("5min")
}

/// Franja para los recordatorios, derivada del momento más difícil del día;
/// default "morning".
pub fn reminder_slot(answers: &AnswerMap) -> &str {
    answers.get("worst_time").and_then(|v| v.as_single()).unwrap_or("morning")
}

/// Sustituye `{{name}}` por el prénom del usuario (o lo elimina si no hay).
pub fn interpolate_name(text: &str, answers: &AnswerMap) -> String {
    text.replace("{{name}}", user_name(answers))
}
