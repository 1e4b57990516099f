//! Paso del onboarding: un nodo del grafo, corresponde a una pantalla.
//!
//! La arista saliente (`Edge`) es un id literal o un puntero a función pura
//! sobre el mapa de respuestas. Punteros `fn` y no closures: la definición
//! sigue siendo `Clone`, comparable por contenido estático y testeable sin
//! capa de render. Las funciones de rama deben ser totales — ante una
//! respuesta ausente eligen una rama por defecto documentada, jamás panic.

use super::answers::AnswerMap;
use super::content::{ResolvedContent, StepContent};

/// Función de rama: decide el siguiente id a partir de las respuestas.
pub type BranchFn = fn(&AnswerMap) -> String;

/// Resolver de contenido dinámico; se invoca perezosamente en lectura,
/// nunca se cachea (una respuesta editada vía back debe reflejarse).
pub type DynamicContentFn = fn(&AnswerMap) -> ResolvedContent;

/// Tag cerrado que indica qué renderer usa la pantalla.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Splash,
    QuestionSingle,
    QuestionMulti,
    InputText,
    Info,
    Loading,
    NotificationsConfig,
    ThemeGrid,
    Paywall,
    Success,
    Redirect,
}

impl StepKind {
    /// Kinds sobre los que la navegación hacia atrás queda bloqueada aunque
    /// haya historial: intros y paywall (evita re-disparar el flujo de
    /// compra con el botón back).
    pub fn blocks_back_navigation(self) -> bool {
        matches!(self, StepKind::Splash | StepKind::Paywall)
    }
}

/// Arista saliente del paso.
#[derive(Debug, Clone)]
pub enum Edge {
    /// Siguiente paso fijo.
    Literal(String),
    /// Rama dependiente de respuestas.
    Branch(BranchFn),
}

impl Edge {
    pub fn to(target: &str) -> Self {
        Edge::Literal(target.to_string())
    }
}

/// Un paso del grafo de onboarding.
#[derive(Debug, Clone)]
pub struct Step {
    /// Id estable entre sesiones; clave del grafo y del mapa de respuestas.
    pub id: String,
    pub kind: StepKind,
    pub content: StepContent,
    pub edge: Edge,
    /// Resolver opcional que superpone title/subtitle en lectura.
    pub dynamic_content: Option<DynamicContentFn>,
    pub skippable: bool,
    pub skip_label: Option<super::content::LocalizedString>,
    pub cta: Option<super::content::LocalizedString>,
    /// Si está presente, el renderer debe auto-disparar `advance` tras este
    /// retardo, cancelable si la pantalla se desmonta antes.
    pub auto_advance_ms: Option<u64>,
    /// Duración de pantallas de carga (presentación, no navegación).
    pub duration_ms: Option<u64>,
}

impl Step {
    pub fn new(id: &str, kind: StepKind, content: StepContent, edge: Edge) -> Self {
        Self { id: id.to_string(),
               kind,
               content,
               edge,
               dynamic_content: None,
               skippable: false,
               skip_label: None,
               cta: None,
               auto_advance_ms: None,
               duration_ms: None }
    }

    pub fn dynamic(mut self, resolver: DynamicContentFn) -> Self {
        self.dynamic_content = Some(resolver);
        self
    }

    pub fn skippable(mut self, fr: &str, en: &str) -> Self {
        self.skippable = true;
        self.skip_label = Some(super::content::LocalizedString::new(fr, en));
        self
    }

    pub fn cta(mut self, fr: &str, en: &str) -> Self {
        self.cta = Some(super::content::LocalizedString::new(fr, en));
        self
    }

    pub fn auto_advance(mut self, ms: u64) -> Self {
        self.auto_advance_ms = Some(ms);
        self
    }

    pub fn duration(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}
