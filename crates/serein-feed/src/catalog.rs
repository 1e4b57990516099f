//! Catálogo embebido de afirmaciones.

use serde::{Deserialize, Serialize};

use serein_core::LocalizedString;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affirmation {
    pub id: String,
    pub text: LocalizedString,
    pub category: String,
    pub premium: bool,
}

impl Affirmation {
    fn new(id: &str, category: &str, premium: bool, fr: &str, en: &str) -> Self {
        Self { id: id.to_string(),
               text: LocalizedString::new(fr, en),
               category: category.to_string(),
               premium }
    }
}

/// Catálogo de arranque; el contenido real llega por sincronización, pero
/// el feed debe funcionar offline desde el primer lanzamiento.
pub fn builtin_catalog() -> Vec<Affirmation> {
    vec![
        Affirmation::new("calm_01", "calm", false, "Je mérite la paix intérieure", "I deserve inner peace"),
        Affirmation::new("calm_02", "calm", false, "Chaque respiration m'apaise", "Each breath calms me"),
        Affirmation::new("calm_03", "calm", true, "Le calme est ma force tranquille", "Calm is my quiet strength"),
        Affirmation::new("sleep_01", "sleep", false, "Mon corps sait comment se reposer", "My body knows how to rest"),
        Affirmation::new("sleep_02", "sleep", true, "Je lâche prise sur cette journée", "I let go of this day"),
        Affirmation::new("confidence_01", "confidence", false, "J'ai confiance en mon chemin", "I trust my path"),
        Affirmation::new("confidence_02", "confidence", true, "Ma voix compte", "My voice matters"),
        Affirmation::new("stress_01", "stress", false, "Je peux gérer ce qui vient", "I can handle what comes"),
        Affirmation::new("stress_02", "stress", false, "Une chose à la fois", "One thing at a time"),
        Affirmation::new("stress_03", "stress", true, "La tension me quitte à chaque expiration", "Tension leaves me with every exhale"),
    ]
}
