//! Sesión de onboarding: máquina de estados de recorrido persistida.
//!
//! Estados: `AtStep(id)` mientras `is_completed == false`, `Done` después.
//! `Done` es pegajoso — `advance`/`go_back`/`skip`/`go_to_step` son no-ops
//! una vez completada; el renderer ya debería haber salido del flujo, pero
//! la sesión no se corrompe si la llaman igual.
//!
//! Persistencia: un blob JSON bajo `storage_key` en cada mutación,
//! fire-and-forget. Un fallo de guardado se registra con `warn!` y la
//! transición en memoria sigue válida; tras un crash el usuario ve como
//! mucho la pantalla anterior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::{DEFAULT_SESSION_KEY, TERMINAL_STEP_ID};
use crate::definition::FlowDefinition;
use crate::model::{AnswerMap, AnswerValue, Step};
use crate::store::StateStore;

/// Estado persistido de la sesión. Exactamente esto se serializa; los
/// valores derivados (progreso, can_go_back, contenido resuelto) se
/// recalculan en lectura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: Uuid,
    /// Fingerprint de la definición contra la que se creó la sesión. Si el
    /// flujo desplegado cambia, la sesión guardada se descarta al cargar.
    pub definition_hash: String,
    pub current_step_id: String,
    pub answers: AnswerMap,
    pub step_history: Vec<String>,
    pub is_completed: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionState {
    fn fresh(definition: &FlowDefinition) -> Self {
        Self { session_id: Uuid::new_v4(),
               definition_hash: definition.definition_hash.clone(),
               current_step_id: definition.first_step_id().unwrap_or(TERMINAL_STEP_ID).to_string(),
               answers: AnswerMap::new(),
               step_history: Vec::new(),
               is_completed: false,
               started_at: None,
               completed_at: None }
    }
}

/// Sesión construida explícitamente con store inyectado: varias instancias
/// (tests, por ejemplo) no colisionan si usan claves distintas.
pub struct OnboardingSession<S: StateStore> {
    definition: Arc<FlowDefinition>,
    store: S,
    storage_key: String,
    state: SessionState,
}

impl<S: StateStore> OnboardingSession<S> {
    /// Carga la sesión persistida bajo la clave por defecto, o crea una
    /// nueva en el primer paso si no hay nada guardado.
    pub fn load_or_create(definition: Arc<FlowDefinition>, store: S) -> Self {
        Self::load_or_create_with_key(definition, store, DEFAULT_SESSION_KEY)
    }

    /// Variante con clave de almacenamiento explícita.
    ///
    /// Un blob ilegible o con `definition_hash` distinto al de la
    /// definición actual se descarta: mejor reiniciar el onboarding que
    /// dejar al usuario apuntando a un id que ya no existe.
    pub fn load_or_create_with_key(definition: Arc<FlowDefinition>, store: S, key: &str) -> Self {
        let restored = match store.load(key) {
            Ok(Some(value)) => match serde_json::from_value::<SessionState>(value) {
                Ok(state) if state.definition_hash == definition.definition_hash => Some(state),
                Ok(state) => {
                    debug!(session_id = %state.session_id, "definition changed, discarding stored session");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "stored session unreadable, starting fresh");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "session load failed, starting fresh");
                None
            }
        };

        let state = restored.unwrap_or_else(|| SessionState::fresh(&definition));
        let session = Self { definition,
                             store,
                             storage_key: key.to_string(),
                             state };
        session.persist();
        session
    }

    // ---- Transiciones ----

    /// Inserta/sobrescribe la respuesta del paso. La primera respuesta de
    /// la sesión fija `started_at` (idempotente: llamadas posteriores no lo
    /// mueven). No transiciona ni valida la forma del valor contra
    /// min/max_selection — eso es del renderer.
    pub fn record_answer(&mut self, step_id: &str, value: AnswerValue) {
        if self.state.started_at.is_none() {
            self.state.started_at = Some(Utc::now());
        }
        self.state.answers.insert(step_id.to_string(), value);
        self.persist();
    }

    /// Transición principal hacia adelante. Único punto donde se evalúan
    /// ramas, así la decisión siempre refleja el mapa de respuestas tal
    /// como está al avanzar.
    pub fn advance(&mut self) {
        if self.state.is_completed {
            return;
        }
        let target = self.definition
                         .resolve_next_step_id(&self.state.current_step_id, &self.state.answers);
        if target == TERMINAL_STEP_ID {
            // fin del recorrido: no se empuja el paso actual al historial
            self.state.is_completed = true;
            self.state.completed_at = Some(Utc::now());
            debug!(session_id = %self.state.session_id, "onboarding completed");
        } else {
            debug!(from = %self.state.current_step_id, to = %target, "advance");
            self.state.step_history.push(std::mem::replace(&mut self.state.current_step_id, target));
        }
        self.persist();
    }

    /// Navegación hacia atrás. Historial vacío → no-op. No borra respuestas
    /// del paso que se abandona; sólo un `record_answer` posterior las
    /// sobrescribe.
    pub fn go_back(&mut self) {
        if self.state.is_completed {
            return;
        }
        let Some(previous) = self.state.step_history.pop() else {
            return;
        };
        debug!(from = %self.state.current_step_id, to = %previous, "go_back");
        self.state.current_step_id = previous;
        self.persist();
    }

    /// Idéntico a `advance`; existe como entrada separada para que el
    /// renderer ofrezca "saltar" sin fingir que hubo respuesta.
    pub fn skip(&mut self) {
        self.advance();
    }

    /// Salto directo (deep link): empuja el paso actual al historial y fija
    /// `id` sin consultar la arista ni validar que exista. Un id inválido
    /// deja la sesión en un paso que el renderer no puede resolver; debe
    /// renderizar nada, no crashear.
    pub fn go_to_step(&mut self, id: &str) {
        if self.state.is_completed {
            return;
        }
        self.state
            .step_history
            .push(std::mem::replace(&mut self.state.current_step_id, id.to_string()));
        self.persist();
    }

    /// Restaura el estado inicial: respuestas, historial y flags de
    /// completitud limpios. Usado en tests y para rehacer el onboarding.
    pub fn reset(&mut self) {
        self.state = SessionState::fresh(&self.definition);
        self.persist();
    }

    // ---- Valores derivados (calculados, nunca almacenados) ----

    /// Progreso aproximado 0..=100, basado en el índice declarado del paso
    /// actual. Las ramas pueden producir saltos no monótonos; comportamiento
    /// aceptado.
    pub fn progress(&self) -> u8 {
        if self.state.is_completed || self.definition.is_empty() {
            return 100;
        }
        match self.definition.step_index(&self.state.current_step_id) {
            None => 100, // más allá del final
            Some(index) => {
                let pct = (index as f64 / self.definition.len() as f64) * 100.0;
                pct.round().clamp(0.0, 100.0) as u8
            }
        }
    }

    /// `false` con historial vacío o cuando el kind del paso actual bloquea
    /// el back (splash, paywall) aunque haya historial.
    pub fn can_go_back(&self) -> bool {
        if self.state.is_completed || self.state.step_history.is_empty() {
            return false;
        }
        match self.definition.step_by_id(&self.state.current_step_id) {
            Some(step) => !step.kind.blocks_back_navigation(),
            // paso desconocido (go_to_step inválido): sólo manda el historial
            None => true,
        }
    }

    /// Paso actual tal cual está en la definición.
    pub fn current_step(&self) -> Option<&Step> {
        self.definition.step_by_id(&self.state.current_step_id)
    }

    /// Paso actual con el contenido dinámico resuelto contra el mapa de
    /// respuestas vigente, superpuesto sobre title/subtitle. Se resuelve en
    /// lectura y no se cachea: el mapa puede haber cambiado desde que se
    /// entró al paso.
    pub fn current_step_resolved(&self) -> Option<Step> {
        let mut step = self.current_step()?.clone();
        if let Some(resolver) = step.dynamic_content {
            let resolved = resolver(&self.state.answers);
            step.content.title = Some(resolved.title);
            step.content.subtitle = Some(resolved.subtitle);
        }
        Some(step)
    }

    /// Retardo de auto-avance del paso actual, si lo declara.
    pub fn auto_advance_delay(&self) -> Option<Duration> {
        self.current_step().and_then(|s| s.auto_advance_ms).map(Duration::from_millis)
    }

    pub fn answer(&self, step_id: &str) -> Option<&AnswerValue> {
        self.state.answers.get(step_id)
    }

    /// Respuesta del paso como token único, si existe y es simple.
    pub fn single_answer(&self, step_id: &str) -> Option<&str> {
        self.answer(step_id).and_then(|v| v.as_single())
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.state.answers
    }

    pub fn current_step_id(&self) -> &str {
        &self.state.current_step_id
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn definition(&self) -> &FlowDefinition {
        &self.definition
    }

    // Guardado fire-and-forget: nunca bloquea ni propaga; tras un crash se
    // pierde como mucho la última transición.
    fn persist(&self) {
        let value = match serde_json::to_value(&self.state) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "session state not serializable");
                return;
            }
        };
        if let Err(e) = self.store.save(&self.storage_key, &value) {
            warn!(error = %e, key = %self.storage_key, "session save failed");
        }
    }
}
