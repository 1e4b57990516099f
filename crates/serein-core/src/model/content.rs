//! Contenido de presentación de un paso.
//!
//! El motor trata este payload como opaco salvo por un campo: el resolver de
//! contenido dinámico (ver `step.rs`), que permite que título/subtítulo
//! dependan de respuestas anteriores.

use serde::{Deserialize, Serialize};

/// Par FR/EN embebido. No hay tabla i18n externa en este core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub fr: String,
    pub en: String,
}

impl LocalizedString {
    pub fn new(fr: &str, en: &str) -> Self {
        Self { fr: fr.to_string(),
               en: en.to_string() }
    }

    /// Resuelve según el código de idioma; cualquier cosa distinta de "fr"
    /// cae en inglés.
    pub fn resolve(&self, lang: &str) -> &str {
        if lang == "fr" {
            &self.fr
        } else {
            &self.en
        }
    }
}

/// Opción de una pregunta (única o múltiple).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: String,
    pub label: LocalizedString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recommended: bool,
}

impl OptionItem {
    pub fn new(id: &str, label: LocalizedString) -> Self {
        Self { id: id.to_string(),
               label,
               icon: None,
               recommended: false }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }
}

/// Estadística destacada ("73% de los usuarios...").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub text: LocalizedString,
}

/// Beneficio con icono para pantallas informativas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub text: LocalizedString,
}

/// Fragmento producido por un resolver de contenido dinámico; se superpone
/// sobre los campos estáticos title/subtitle en el momento de lectura.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub title: LocalizedString,
    pub subtitle: LocalizedString,
}

/// Payload de presentación dependiente del kind. Todos los campos son
/// opcionales: cada renderer toma lo que necesita.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepContent {
    pub title: Option<LocalizedString>,
    pub subtitle: Option<LocalizedString>,
    pub options: Vec<OptionItem>,
    pub placeholder: Option<LocalizedString>,
    pub animation: Option<String>,
    pub stat: Option<Stat>,
    pub rating: Option<u8>,
    pub review: Option<LocalizedString>,
    pub benefits: Vec<Benefit>,
    pub min_selection: Option<usize>,
    pub max_selection: Option<usize>,
}

impl StepContent {
    pub fn titled(fr: &str, en: &str) -> Self {
        Self { title: Some(LocalizedString::new(fr, en)),
               ..Self::default() }
    }

    pub fn subtitle(mut self, fr: &str, en: &str) -> Self {
        self.subtitle = Some(LocalizedString::new(fr, en));
        self
    }

    pub fn option(mut self, option: OptionItem) -> Self {
        self.options.push(option);
        self
    }

    pub fn placeholder(mut self, fr: &str, en: &str) -> Self {
        self.placeholder = Some(LocalizedString::new(fr, en));
        self
    }

    pub fn animation(mut self, name: &str) -> Self {
        self.animation = Some(name.to_string());
        self
    }

    pub fn stat(mut self, number: &str, fr: &str, en: &str) -> Self {
        self.stat = Some(Stat { number: number.to_string(),
                                text: LocalizedString::new(fr, en) });
        self
    }

    pub fn review(mut self, rating: u8, fr: &str, en: &str) -> Self {
        self.rating = Some(rating);
        self.review = Some(LocalizedString::new(fr, en));
        self
    }

    pub fn benefit(mut self, icon: &str, fr: &str, en: &str) -> Self {
        self.benefits.push(Benefit { icon: icon.to_string(),
                                     text: LocalizedString::new(fr, en) });
        self
    }

    pub fn min_selection(mut self, n: usize) -> Self {
        self.min_selection = Some(n);
        self
    }

    pub fn max_selection(mut self, n: usize) -> Self {
        self.max_selection = Some(n);
        self
    }
}
