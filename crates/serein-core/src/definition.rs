//! Definición inmutable del flujo: grafo de pasos + lookups totales.
//!
//! `FlowDefinition` guarda los pasos en un `IndexMap` (orden declarado para
//! `step_index`/progreso, lookup O(1) por id) y un `definition_hash` sobre
//! la lista ordenada de ids — el mismo fingerprint que la sesión persiste
//! para invalidarse cuando el flujo desplegado cambia.
//!
//! Semántica de fallos: todos los lookups son totales. Un id ausente degrada
//! al centinela terminal en vez de lanzar, de modo que el motor siempre
//! puede avanzar incluso con una definición incompleta.

use indexmap::IndexMap;
use serde_json::json;

use crate::constants::{ENGINE_VERSION, TERMINAL_STEP_ID};
use crate::hashing::hash_value;
use crate::model::{AnswerMap, Edge, Step};

pub struct FlowDefinition {
    steps: IndexMap<String, Step>,
    pub definition_hash: String,
}

impl FlowDefinition {
    /// Lookup por id. `None` cuando el id no existe — el llamador debe
    /// tratarlo como "caer al terminal", no como error.
    pub fn step_by_id(&self, id: &str) -> Option<&Step> {
        self.steps.get(id)
    }

    /// Resuelve la arista saliente de `current_id` contra `answers`.
    ///
    /// - Id desconocido → centinela terminal.
    /// - `Edge::Literal` → ese id, ignore lo que diga `answers`.
    /// - `Edge::Branch` → resultado de la función (pura y total).
    pub fn resolve_next_step_id(&self, current_id: &str, answers: &AnswerMap) -> String {
        match self.step_by_id(current_id) {
            None => TERMINAL_STEP_ID.to_string(),
            Some(step) => match &step.edge {
                Edge::Literal(target) => target.clone(),
                Edge::Branch(f) => f(answers),
            },
        }
    }

    /// Posición en el orden declarado; sólo para mostrar progreso. `None`
    /// se interpreta como "más allá del final" (100%).
    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.get_index_of(id)
    }

    /// Id del primer paso declarado.
    pub fn first_step_id(&self) -> Option<&str> {
        self.steps.first().map(|(id, _)| id.as_str())
    }

    /// Cantidad de pasos declarados. Cota superior de las pantallas que un
    /// usuario concreto verá: las ramas pueden saltarse pasos, y esa
    /// aproximación en el progreso es aceptada, no un bug.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Itera los pasos en orden declarado.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values()
    }

    /// Targets literales que no existen ni son el centinela. Las funciones
    /// de rama no pueden enumerarse estáticamente; se cubren con tests del
    /// flujo concreto.
    pub fn validate(&self) -> Vec<String> {
        self.steps
            .values()
            .filter_map(|step| match &step.edge {
                Edge::Literal(target) if target != TERMINAL_STEP_ID && !self.steps.contains_key(target) => {
                    Some(format!("{} -> {}", step.id, target))
                }
                _ => None,
            })
            .collect()
    }
}

/// Builder: acumula pasos en orden declarado y calcula el fingerprint al
/// construir.
#[derive(Default)]
pub struct FlowBuilder {
    steps: Vec<Step>,
}

impl FlowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: Step) -> Self {
        debug_assert!(!self.steps.iter().any(|s| s.id == step.id),
                      "id de paso duplicado: {}",
                      step.id);
        self.steps.push(step);
        self
    }

    pub fn build(self) -> FlowDefinition {
        let ids: Vec<&str> = self.steps.iter().map(|s| s.id.as_str()).collect();
        let definition_hash = hash_value(&json!({
                                             "engine_version": ENGINE_VERSION,
                                             "step_ids": ids,
                                         }));
        let steps = self.steps.into_iter().map(|s| (s.id.clone(), s)).collect();
        FlowDefinition { steps, definition_hash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StepContent, StepKind};

    fn literal(id: &str, target: &str) -> Step {
        Step::new(id, StepKind::Info, StepContent::default(), Edge::to(target))
    }

    fn pick_branch(answers: &AnswerMap) -> String {
        match answers.get("a").and_then(|v| v.as_single()) {
            Some("x") => "c".to_string(),
            _ => "d".to_string(),
        }
    }

    fn small_flow() -> FlowDefinition {
        FlowBuilder::new().step(literal("a", "b"))
                          .step(Step::new("b", StepKind::QuestionSingle, StepContent::default(), Edge::Branch(pick_branch)))
                          .step(literal("c", TERMINAL_STEP_ID))
                          .step(literal("d", TERMINAL_STEP_ID))
                          .build()
    }

    #[test]
    fn literal_edge_ignores_answers() {
        let def = small_flow();
        let mut answers = AnswerMap::new();
        assert_eq!(def.resolve_next_step_id("a", &answers), "b");
        answers.insert("unrelated".into(), "z".into());
        answers.insert("a".into(), "x".into());
        assert_eq!(def.resolve_next_step_id("a", &answers), "b");
    }

    #[test]
    fn branch_edge_is_total_over_any_answer_map() {
        let def = small_flow();
        // mapa vacío: rama por defecto
        assert_eq!(def.resolve_next_step_id("b", &AnswerMap::new()), "d");
        // claves sin relación: rama por defecto
        let mut noise = AnswerMap::new();
        noise.insert("other".into(), vec!["p", "q"].into());
        assert_eq!(def.resolve_next_step_id("b", &noise), "d");
        // respuesta esperada: rama elegida
        let mut answers = AnswerMap::new();
        answers.insert("a".into(), "x".into());
        assert_eq!(def.resolve_next_step_id("b", &answers), "c");
    }

    #[test]
    fn unknown_id_falls_back_to_terminal() {
        let def = small_flow();
        assert_eq!(def.resolve_next_step_id("missing", &AnswerMap::new()), TERMINAL_STEP_ID);
        assert_eq!(def.step_index("missing"), None);
        assert!(def.step_by_id("missing").is_none());
    }

    #[test]
    fn declared_order_drives_index() {
        let def = small_flow();
        assert_eq!(def.first_step_id(), Some("a"));
        assert_eq!(def.step_index("a"), Some(0));
        assert_eq!(def.step_index("d"), Some(3));
        assert_eq!(def.len(), 4);
    }

    #[test]
    fn validate_reports_dangling_literal_targets() {
        let def = FlowBuilder::new().step(literal("a", "nowhere"))
                                    .step(literal("b", TERMINAL_STEP_ID))
                                    .build();
        assert_eq!(def.validate(), vec!["a -> nowhere".to_string()]);
        assert!(small_flow().validate().is_empty());
    }

    #[test]
    fn definition_hash_tracks_step_list() {
        let a = small_flow();
        let b = small_flow();
        assert_eq!(a.definition_hash, b.definition_hash);
        let c = FlowBuilder::new().step(literal("a", TERMINAL_STEP_ID)).build();
        assert_ne!(a.definition_hash, c.definition_hash);
    }
}
