//! Demo: recorre el onboarding de Serein contra un store en disco y arma un
//! primer feed de afirmaciones con lo contestado.
//!
//! `SEREIN_DATA_DIR` controla dónde queda el estado; relanzar el binario
//! retoma la sesión donde quedó (o la descarta si el flujo cambió).

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use serein_core::{AnswerValue, OnboardingSession, StepKind};
use serein_feed::{build_feed, builtin_catalog};
use serein_flows::{reminder_slot, time_commitment, user_name, SEREIN_FLOW};
use serein_persistence::FileStateStore;

/// Respuestas guionadas de la demo, por id de paso.
fn scripted_answer(step_id: &str) -> Option<AnswerValue> {
    match step_id {
        "name_input" => Some("Camille".into()),
        "main_goal" => Some("reduce_anxiety".into()),
        "current_feeling" => Some("stressed".into()),
        "anxiety_frequency" => Some("often".into()),
        "anxiety_triggers" => Some(vec!["work", "future"].into()),
        "anxiety_symptoms" => Some(vec!["racing_thoughts", "trouble_sleeping"].into()),
        "experience_meditation" => Some("tried".into()),
        "barriers" => Some(vec!["no_time"].into()),
        "time_commitment" => Some("5min".into()),
        "worst_time" => Some("night".into()),
        "content_preferences" => Some(vec!["breathing", "sleep"].into()),
        "theme_selection" => Some("ocean".into()),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .init();

    let store = FileStateStore::from_env()?;
    let mut session = OnboardingSession::load_or_create(SEREIN_FLOW.clone(), store);
    info!(session_id = %session.state().session_id,
          step = session.current_step_id(),
          "onboarding session ready");

    while !session.is_completed() {
        let Some(step) = session.current_step_resolved() else {
            // id sin paso (no debería pasar con el flujo embebido): avanzar
            // cae al terminal en vez de quedarse atascado
            session.advance();
            continue;
        };

        let title = step.content.title.as_ref().map(|t| t.resolve("en")).unwrap_or("");
        info!(step = %step.id, kind = ?step.kind, progress = session.progress(), title, "screen");

        if let Some(delay) = session.auto_advance_delay() {
            tokio::time::sleep(delay).await;
        }
        if let Some(answer) = scripted_answer(&step.id) {
            session.record_answer(&step.id, answer);
        }
        if step.kind == StepKind::NotificationsConfig && step.skippable {
            session.skip();
        } else {
            session.advance();
        }
    }

    let answers = session.answers().clone();
    info!(progress = session.progress(),
          name = user_name(&answers),
          daily = time_commitment(&answers),
          reminders = reminder_slot(&answers),
          "onboarding completed");

    // Primer feed del usuario: sin premium todavía (acaba de empezar el trial)
    let mut rng = StdRng::from_entropy();
    let feed = build_feed(&builtin_catalog(), None, false, &mut rng);
    for (i, item) in feed.iter().take(3).enumerate() {
        info!(position = i,
              background = item.background.id,
              text = item.affirmation.text.resolve("en"),
              "feed item");
    }

    Ok(())
}
