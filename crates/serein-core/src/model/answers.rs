//! Mapa de respuestas acumuladas, clave = id del paso que preguntó.
//!
//! El valor persiste como JSON "plano": un string para selección única o
//! texto libre, una lista de strings para selección múltiple (por eso el
//! enum es `untagged`). El motor no valida la forma contra las restricciones
//! min/max del paso: eso es responsabilidad del renderer antes de llamar a
//! `record_answer`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type AnswerMap = HashMap<String, AnswerValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Valor como token único; `None` si es multi-selección.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(s) => Some(s),
            AnswerValue::Multi(_) => None,
        }
    }

    /// Tokens seleccionados; una respuesta única se ve como lista de uno.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            AnswerValue::Single(s) => vec![s.as_str()],
            AnswerValue::Multi(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }

    /// `true` si el token figura entre los seleccionados.
    pub fn contains(&self, token: &str) -> bool {
        match self {
            AnswerValue::Single(s) => s == token,
            AnswerValue::Multi(v) => v.iter().any(|s| s == token),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Single(s.to_string())
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(v: Vec<&str>) -> Self {
        AnswerValue::Multi(v.into_iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_serde_round_trip() {
        let single: AnswerValue = "no_time".into();
        let multi: AnswerValue = vec!["work", "family"].into();
        assert_eq!(serde_json::to_string(&single).unwrap(), r#""no_time""#);
        assert_eq!(serde_json::to_string(&multi).unwrap(), r#"["work","family"]"#);

        let back: AnswerValue = serde_json::from_str(r#"["work","family"]"#).unwrap();
        assert_eq!(back, multi);
    }

    #[test]
    fn contains_covers_both_shapes() {
        let single: AnswerValue = "tried".into();
        let multi: AnswerValue = vec!["no_time", "forget"].into();
        assert!(single.contains("tried"));
        assert!(!single.contains("never"));
        assert!(multi.contains("forget"));
        assert!(!multi.contains("no_results"));
    }
}
