//! Grafo de onboarding de Serein: 24 pantallas en 7 fases.
//!
//! Reducido de 48 pantallas (-50%) para mejorar conversión. El orden
//! declarado alimenta el progreso; las aristas, la navegación real.

use once_cell::sync::Lazy;
use std::sync::Arc;

use serein_core::{AnswerMap, Edge, FlowBuilder, FlowDefinition, LocalizedString, OptionItem, ResolvedContent, Step, StepContent, StepKind, TERMINAL_STEP_ID};

/// Rama tras `experience_meditation`: quien probó y abandonó pasa por la
/// pantalla que trata la objeción; el resto va directo a `barriers`.
/// Respuesta ausente → rama por defecto (`barriers`).
fn next_after_meditation_experience(answers: &AnswerMap) -> String {
    match answers.get("experience_meditation").map(|v| v.contains("tried")) {
        Some(true) => "objection_handler".to_string(),
        _ => "barriers".to_string(),
    }
}

/// Contenido dinámico de `barrier_response`: responde a la primera barrera
/// reconocida en orden de prioridad de producto (tiempo > resultados >
/// olvido), con un cierre genérico por defecto.
fn barrier_response_content(answers: &AnswerMap) -> ResolvedContent {
    let barriers = answers.get("barriers");
    let picked = |token: &str| barriers.map(|v| v.contains(token)).unwrap_or(false);

    if picked("no_time") {
        return ResolvedContent {
            title: LocalizedString::new("Bonne nouvelle !", "Good news!"),
            subtitle: LocalizedString::new(
                "Nos exercices les plus efficaces durent seulement 3 minutes. C'est moins que le temps de faire un café.",
                "Our most effective exercises last only 3 minutes. That's less than making a coffee.",
            ),
        };
    }
    if picked("no_results") {
        return ResolvedContent {
            title: LocalizedString::new("Les résultats arrivent vite", "Results come quickly"),
            subtitle: LocalizedString::new(
                "85% de nos utilisateurs ressentent une différence dès la première séance. La clé : la régularité.",
                "85% of our users feel a difference from the first session. The key: consistency.",
            ),
        };
    }
    if picked("forget") {
        return ResolvedContent {
            title: LocalizedString::new("On s'occupe de tout", "We've got you covered"),
            subtitle: LocalizedString::new(
                "Nos rappels intelligents s'adaptent à votre routine. Vous n'oublierez plus jamais.",
                "Our smart reminders adapt to your routine. You'll never forget again.",
            ),
        };
    }
    ResolvedContent {
        title: LocalizedString::new("Parfait !", "Perfect!"),
        subtitle: LocalizedString::new(
            "Serein s'adapte à votre rythme et vos besoins.",
            "Serein adapts to your pace and needs.",
        ),
    }
}

/// Construye la definición completa del flujo Serein.
pub fn serein_flow() -> FlowDefinition {
    FlowBuilder::new()
        // ---- Fase 1: intro ----
        .step(Step::new("splash_combined",
                        StepKind::Splash,
                        StepContent::titled("Retrouvez votre calme intérieur", "Find your inner calm")
                            .subtitle("grâce à la méditation et la respiration guidée",
                                      "through guided meditation and breathing")
                            .animation("breathing_circle")
                            .stat("+2 millions", "de personnes plus sereines", "calmer people"),
                        Edge::to("splash_review_1")).auto_advance(3000))
        .step(Step::new("splash_review_1",
                        StepKind::Splash,
                        StepContent::default().review(5,
                                                      "Cette app m'a aidé à gérer mes crises d'anxiété. Je la recommande à tous.",
                                                      "This app helped me manage my anxiety attacks. I recommend it to everyone."),
                        Edge::to("name_input")).auto_advance(3000))
        // ---- Fase 2: perfil de base ----
        .step(Step::new("name_input",
                        StepKind::InputText,
                        StepContent::titled("Comment souhaitez-vous être appelé ?", "What would you like to be called?")
                            .subtitle("Votre prénom sera utilisé pour personnaliser votre expérience",
                                      "Your name will be used to personalize your experience")
                            .placeholder("Votre prénom", "Your first name"),
                        Edge::to("stat_anxiety")).skippable("Ignorer", "Skip"))
        .step(Step::new("stat_anxiety",
                        StepKind::Info,
                        StepContent::default().stat("73%",
                                                    "des utilisateurs Serein ressentent une réduction de leur anxiété dès la première semaine",
                                                    "of Serein users feel a reduction in anxiety within the first week"),
                        Edge::to("main_goal")).cta("Continuer", "Continue"))
        .step(Step::new("main_goal",
                        StepKind::QuestionSingle,
                        StepContent::titled("Quel est votre objectif principal ?", "What is your main goal?")
                            .subtitle("Choisissez celui qui vous parle le plus", "Choose the one that speaks to you most")
                            .option(OptionItem::new("reduce_anxiety", LocalizedString::new("Réduire mon anxiété", "Reduce my anxiety")).icon("😰"))
                            .option(OptionItem::new("sleep_better", LocalizedString::new("Mieux dormir", "Sleep better")).icon("😴"))
                            .option(OptionItem::new("manage_stress", LocalizedString::new("Gérer mon stress", "Manage my stress")).icon("😤"))
                            .option(OptionItem::new("focus", LocalizedString::new("Améliorer ma concentration", "Improve my focus")).icon("🎯"))
                            .option(OptionItem::new("self_confidence", LocalizedString::new("Gagner en confiance", "Build confidence")).icon("💪"))
                            .option(OptionItem::new("inner_peace", LocalizedString::new("Trouver la paix intérieure", "Find inner peace")).icon("🧘")),
                        Edge::to("current_feeling")))
        // ---- Fase 3: estado emocional ----
        .step(Step::new("current_feeling",
                        StepKind::QuestionSingle,
                        StepContent::titled("Comment vous sentez-vous en ce moment ?", "How are you feeling right now?")
                            .option(OptionItem::new("great", LocalizedString::new("Très bien", "Great")).icon("😊"))
                            .option(OptionItem::new("good", LocalizedString::new("Bien", "Good")).icon("🙂"))
                            .option(OptionItem::new("okay", LocalizedString::new("Correct", "Okay")).icon("😐"))
                            .option(OptionItem::new("stressed", LocalizedString::new("Stressé", "Stressed")).icon("😰"))
                            .option(OptionItem::new("anxious", LocalizedString::new("Anxieux", "Anxious")).icon("😟"))
                            .option(OptionItem::new("overwhelmed", LocalizedString::new("Submergé", "Overwhelmed")).icon("😵")),
                        Edge::to("anxiety_frequency")))
        .step(Step::new("anxiety_frequency",
                        StepKind::QuestionSingle,
                        StepContent::titled("À quelle fréquence ressentez-vous de l'anxiété ou du stress ?",
                                            "How often do you feel anxiety or stress?")
                            .option(OptionItem::new("rarely", LocalizedString::new("Rarement", "Rarely")))
                            .option(OptionItem::new("sometimes", LocalizedString::new("Parfois", "Sometimes")))
                            .option(OptionItem::new("often", LocalizedString::new("Souvent", "Often")))
                            .option(OptionItem::new("daily", LocalizedString::new("Tous les jours", "Every day")))
                            .option(OptionItem::new("constant", LocalizedString::new("Presque constamment", "Almost constantly"))),
                        Edge::to("anxiety_triggers")))
        .step(Step::new("anxiety_triggers",
                        StepKind::QuestionMulti,
                        StepContent::titled("Qu'est-ce qui déclenche votre stress ou anxiété ?",
                                            "What triggers your stress or anxiety?")
                            .subtitle("Sélectionnez tout ce qui s'applique", "Select all that apply")
                            .option(OptionItem::new("work", LocalizedString::new("Le travail", "Work")).icon("💼"))
                            .option(OptionItem::new("relationships", LocalizedString::new("Les relations", "Relationships")).icon("💑"))
                            .option(OptionItem::new("health", LocalizedString::new("Ma santé", "My health")).icon("🏥"))
                            .option(OptionItem::new("finances", LocalizedString::new("L'argent", "Money")).icon("💰"))
                            .option(OptionItem::new("future", LocalizedString::new("L'avenir", "The future")).icon("🔮"))
                            .option(OptionItem::new("social", LocalizedString::new("Les situations sociales", "Social situations")).icon("👥"))
                            .option(OptionItem::new("family", LocalizedString::new("La famille", "Family")).icon("👨‍👩‍👧"))
                            .option(OptionItem::new("unknown", LocalizedString::new("Je ne sais pas", "I don't know")).icon("❓"))
                            .min_selection(1),
                        Edge::to("anxiety_symptoms")))
        .step(Step::new("anxiety_symptoms",
                        StepKind::QuestionMulti,
                        StepContent::titled("Quels symptômes ressentez-vous ?", "What symptoms do you experience?")
                            .subtitle("Sélectionnez tout ce qui s'applique", "Select all that apply")
                            .option(OptionItem::new("racing_thoughts", LocalizedString::new("Pensées qui s'emballent", "Racing thoughts")))
                            .option(OptionItem::new("trouble_sleeping", LocalizedString::new("Difficultés à dormir", "Trouble sleeping")))
                            .option(OptionItem::new("tension", LocalizedString::new("Tensions musculaires", "Muscle tension")))
                            .option(OptionItem::new("breathing", LocalizedString::new("Difficultés à respirer", "Difficulty breathing")))
                            .option(OptionItem::new("heart", LocalizedString::new("Cœur qui s'emballe", "Racing heart")))
                            .option(OptionItem::new("fatigue", LocalizedString::new("Fatigue constante", "Constant fatigue")))
                            .option(OptionItem::new("focus", LocalizedString::new("Difficultés à me concentrer", "Difficulty focusing")))
                            .min_selection(1),
                        Edge::to("education_combined")))
        // ---- Fase 4: educación y compromiso ----
        .step(Step::new("education_combined",
                        StepKind::Info,
                        StepContent::titled("La science derrière Serein", "The science behind Serein")
                            .subtitle("La respiration consciente active votre système nerveux parasympathique, réduisant instantanément le stress. Avec seulement 5 minutes par jour :",
                                      "Conscious breathing activates your parasympathetic nervous system, instantly reducing stress. With just 5 minutes a day:")
                            .animation("breathing_wave")
                            .benefit("🧠", "Réduction du cortisol (hormone du stress)", "Reduced cortisol (stress hormone)")
                            .benefit("❤️", "Amélioration de la variabilité cardiaque", "Improved heart rate variability")
                            .benefit("😴", "Meilleure qualité de sommeil", "Better sleep quality")
                            .benefit("🎯", "Concentration accrue", "Increased focus"),
                        Edge::to("experience_meditation")).cta("Continuer", "Continue"))
        .step(Step::new("experience_meditation",
                        StepKind::QuestionSingle,
                        StepContent::titled("Avez-vous déjà essayé la méditation ?", "Have you tried meditation before?")
                            .option(OptionItem::new("never", LocalizedString::new("Jamais", "Never")))
                            .option(OptionItem::new("tried", LocalizedString::new("J'ai essayé mais abandonné", "I tried but gave up")))
                            .option(OptionItem::new("sometimes", LocalizedString::new("De temps en temps", "Sometimes")))
                            .option(OptionItem::new("regular", LocalizedString::new("Je pratique régulièrement", "I practice regularly"))),
                        Edge::Branch(next_after_meditation_experience)))
        .step(Step::new("objection_handler",
                        StepKind::Info,
                        StepContent::titled("Vous n'êtes pas seul", "You're not alone")
                            .subtitle("68% des gens abandonnent la méditation traditionnelle. Serein est différent : nos exercices durent 3-5 minutes et sont guidés pas à pas.",
                                      "68% of people give up traditional meditation. Serein is different: our exercises last 3-5 minutes and are guided step by step."),
                        Edge::to("barriers")).cta("Découvrir", "Discover"))
        .step(Step::new("barriers",
                        StepKind::QuestionMulti,
                        StepContent::titled("Qu'est-ce qui vous empêche de prendre soin de vous ?",
                                            "What prevents you from taking care of yourself?")
                            .option(OptionItem::new("no_time", LocalizedString::new("Je n'ai pas le temps", "I don't have time")))
                            .option(OptionItem::new("forget", LocalizedString::new("J'oublie de le faire", "I forget to do it")))
                            .option(OptionItem::new("no_results", LocalizedString::new("Je ne vois pas de résultats", "I don't see results")))
                            .option(OptionItem::new("dont_know_how", LocalizedString::new("Je ne sais pas comment faire", "I don't know how")))
                            .option(OptionItem::new("hard_to_focus", LocalizedString::new("J'ai du mal à me concentrer", "I have trouble focusing")))
                            .option(OptionItem::new("nothing", LocalizedString::new("Rien, je le fais régulièrement", "Nothing, I do it regularly")))
                            .min_selection(1),
                        Edge::to("barrier_response")))
        .step(Step::new("barrier_response",
                        StepKind::Info,
                        StepContent::default(),
                        Edge::to("time_commitment")).dynamic(barrier_response_content)
                                                    .cta("Continuer", "Continue"))
        .step(Step::new("time_commitment",
                        StepKind::QuestionSingle,
                        StepContent::titled("Combien de temps pouvez-vous consacrer par jour ?",
                                            "How much time can you commit per day?")
                            .subtitle("Vous pourrez toujours ajuster plus tard", "You can always adjust later")
                            .option(OptionItem::new("3min", LocalizedString::new("3 minutes", "3 minutes")))
                            .option(OptionItem::new("5min", LocalizedString::new("5 minutes", "5 minutes")).recommended())
                            .option(OptionItem::new("10min", LocalizedString::new("10 minutes", "10 minutes")))
                            .option(OptionItem::new("15min+", LocalizedString::new("15 minutes ou plus", "15 minutes or more"))),
                        Edge::to("worst_time")))
        .step(Step::new("worst_time",
                        StepKind::QuestionSingle,
                        StepContent::titled("À quel moment de la journée est-ce le plus difficile ?",
                                            "When is it hardest during the day?")
                            .subtitle("Nous programmerons vos rappels en conséquence",
                                      "We'll schedule your reminders accordingly")
                            .option(OptionItem::new("morning", LocalizedString::new("Le matin au réveil", "Morning when waking up")))
                            .option(OptionItem::new("workday", LocalizedString::new("Pendant la journée de travail", "During the workday")))
                            .option(OptionItem::new("evening", LocalizedString::new("Le soir après le travail", "Evening after work")))
                            .option(OptionItem::new("night", LocalizedString::new("La nuit avant de dormir", "At night before sleep")))
                            .option(OptionItem::new("varies", LocalizedString::new("Ça varie", "It varies"))),
                        Edge::to("notifications_ask")))
        .step(Step::new("notifications_ask",
                        StepKind::NotificationsConfig,
                        StepContent::titled("Recevez vos rappels quotidiens", "Get your daily reminders")
                            .subtitle("Un rappel doux pour ne jamais oublier votre moment de calme",
                                      "A gentle reminder to never forget your moment of calm"),
                        Edge::to("content_preferences")).cta("Autoriser les notifications", "Allow notifications")
                                                        .skippable("Plus tard", "Later"))
        // ---- Fase 5: personalización ----
        .step(Step::new("content_preferences",
                        StepKind::QuestionMulti,
                        StepContent::titled("Quels types de contenus vous intéressent ?",
                                            "What types of content interest you?")
                            .option(OptionItem::new("breathing", LocalizedString::new("Exercices de respiration", "Breathing exercises")).icon("🌬️"))
                            .option(OptionItem::new("meditation", LocalizedString::new("Méditations guidées", "Guided meditations")).icon("🧘"))
                            .option(OptionItem::new("sleep", LocalizedString::new("Histoires pour dormir", "Sleep stories")).icon("🌙"))
                            .option(OptionItem::new("emergency", LocalizedString::new("SOS anti-anxiété", "Anti-anxiety SOS")).icon("🆘"))
                            .option(OptionItem::new("music", LocalizedString::new("Musique relaxante", "Relaxing music")).icon("🎵"))
                            .option(OptionItem::new("nature", LocalizedString::new("Sons de la nature", "Nature sounds")).icon("🌿"))
                            .min_selection(2),
                        Edge::to("theme_selection")))
        .step(Step::new("theme_selection",
                        StepKind::ThemeGrid,
                        StepContent::titled("Choisissez votre ambiance", "Choose your ambiance")
                            .subtitle("Vous pourrez la changer à tout moment", "You can change it anytime"),
                        Edge::to("program_preview")))
        .step(Step::new("program_preview",
                        StepKind::Info,
                        StepContent::titled("Votre programme est prêt !", "Your program is ready!")
                            .benefit("🌬️", "Exercices de respiration quotidiens", "Daily breathing exercises")
                            .benefit("🧘", "Méditations personnalisées", "Personalized meditations")
                            .benefit("📊", "Suivi de vos progrès", "Progress tracking")
                            .benefit("🔔", "Rappels intelligents", "Smart reminders"),
                        Edge::to("paywall_timeline")).cta("Découvrir mon programme", "Discover my program"))
        // ---- Fase 6: paywall ----
        .step(Step::new("paywall_timeline",
                        StepKind::Paywall,
                        StepContent::titled("Comment fonctionne l'essai gratuit ?", "How does the free trial work?")
                            .subtitle("Aucun frais ne vous sera facturé aujourd'hui", "You won't be charged today"),
                        Edge::to("payment_processing")).cta("Commencer l'essai gratuit", "Start free trial"))
        .step(Step::new("payment_processing",
                        StepKind::Loading,
                        StepContent::titled("Activation de votre essai...", "Activating your trial..."),
                        Edge::to("welcome_success")).duration(2000))
        .step(Step::new("welcome_success",
                        StepKind::Success,
                        StepContent::titled("Bienvenue dans Serein !", "Welcome to Serein!")
                            .subtitle("Votre voyage vers la sérénité commence maintenant",
                                      "Your journey to serenity starts now")
                            .animation("confetti"),
                        Edge::to("app_home")).cta("Commencer", "Get started"))
        // ---- Fase 7: redirect ----
        .step(Step::new("app_home", StepKind::Redirect, StepContent::default(), Edge::to(TERMINAL_STEP_ID)))
        .build()
}

/// Definición compartida, construida una sola vez.
pub static SEREIN_FLOW: Lazy<Arc<FlowDefinition>> = Lazy::new(|| Arc::new(serein_flow()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_has_no_dangling_literal_edges() {
        let flow = serein_flow();
        assert!(flow.validate().is_empty(), "dangling: {:?}", flow.validate());
        assert_eq!(flow.len(), 24);
        assert_eq!(flow.first_step_id(), Some("splash_combined"));
    }

    #[test]
    fn meditation_branch_routes_tried_through_objection_handler() {
        let flow = serein_flow();
        let mut answers = AnswerMap::new();
        answers.insert("experience_meditation".into(), "tried".into());
        assert_eq!(flow.resolve_next_step_id("experience_meditation", &answers), "objection_handler");

        answers.insert("experience_meditation".into(), "never".into());
        assert_eq!(flow.resolve_next_step_id("experience_meditation", &answers), "barriers");
        // sin respuesta: rama por defecto, nunca panic
        assert_eq!(flow.resolve_next_step_id("experience_meditation", &AnswerMap::new()), "barriers");
    }

    #[test]
    fn barrier_response_priority_order() {
        let mut answers = AnswerMap::new();
        answers.insert("barriers".into(), vec!["forget", "no_time"].into());
        // no_time gana aunque forget también esté marcado
        assert_eq!(barrier_response_content(&answers).title.en, "Good news!");

        answers.insert("barriers".into(), vec!["no_results"].into());
        assert_eq!(barrier_response_content(&answers).title.en, "Results come quickly");

        answers.insert("barriers".into(), vec!["forget"].into());
        assert_eq!(barrier_response_content(&answers).title.en, "We've got you covered");

        answers.insert("barriers".into(), vec!["dont_know_how"].into());
        assert_eq!(barrier_response_content(&answers).title.en, "Perfect!");
        assert_eq!(barrier_response_content(&AnswerMap::new()).title.fr, "Parfait !");
    }

    #[test]
    fn multi_choice_steps_declare_min_selection() {
        let flow = serein_flow();
        for id in ["anxiety_triggers", "anxiety_symptoms", "barriers"] {
            let step = flow.step_by_id(id).unwrap();
            assert_eq!(step.content.min_selection, Some(1), "{id}");
        }
        assert_eq!(flow.step_by_id("content_preferences").unwrap().content.min_selection, Some(2));
    }

    #[test]
    fn splash_steps_auto_advance() {
        let flow = serein_flow();
        assert_eq!(flow.step_by_id("splash_combined").unwrap().auto_advance_ms, Some(3000));
        assert_eq!(flow.step_by_id("splash_review_1").unwrap().auto_advance_ms, Some(3000));
        assert_eq!(flow.step_by_id("payment_processing").unwrap().duration_ms, Some(2000));
    }

    #[test]
    fn terminal_redirect_closes_the_graph() {
        let flow = serein_flow();
        let last = flow.step_by_id("app_home").unwrap();
        assert_eq!(last.kind, StepKind::Redirect);
        assert_eq!(flow.resolve_next_step_id("app_home", &AnswerMap::new()), TERMINAL_STEP_ID);
    }
}
