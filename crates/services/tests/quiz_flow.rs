use std::collections::HashSet;
use std::sync::Arc;

use quiz_core::CorrectAnswers;
use quiz_core::model::{QuestionId, QuestionKind, Response};
use quiz_core::time::{fixed_clock, fixed_now};
use services::{NavKey, QuizAction, QuizService, QuizSettings, QuizState};
use storage::{JsonFileSource, QuestionSource};

const QUESTIONS: &str = r#"[
    {"id": 1, "type": "single", "question": "Which port does HTTPS use by default?",
     "choices": [{"text": "80", "correct": false}, {"text": "443", "correct": true}, {"text": "21", "correct": false}]},
    {"id": 2, "type": "multiple", "question": "Which are symmetric ciphers?",
     "choices": [{"text": "AES", "correct": true}, {"text": "RSA", "correct": false}, {"text": "ChaCha20", "correct": true}]},
    {"id": 3, "type": "match", "question": "Match the control to its purpose", "img": "/images/controls.png",
     "pairs": [{"term": "Firewall", "definition": "Filters traffic"}, {"term": "IDS", "definition": "Detects intrusions"}]}
]"#;

fn source(name: &str) -> Arc<JsonFileSource> {
    let dir = std::env::temp_dir().join(format!("quiz-flow-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, QUESTIONS).unwrap();
    Arc::new(JsonFileSource::new(path))
}

#[test]
fn full_walkthrough_in_source_order() {
    let service = QuizService::new(fixed_clock(), source("walkthrough"))
        .with_settings(QuizSettings::default().with_shuffle(false));
    let state = service.start().unwrap();
    assert_eq!(state.session().unwrap().started_at(), fixed_now());

    // Single: pick the right port, reveal.
    let state = state
        .apply(QuizAction::SelectChoice("443".into()))
        .apply(QuizAction::ToggleAnswers);
    let view = state.view().unwrap();
    assert_eq!(view.question.kind(), QuestionKind::Single);
    assert_eq!(view.is_correct, Some(true));

    // Multiple: one of two correct is not enough.
    let state = state
        .apply(QuizAction::Key(NavKey::ArrowRight))
        .apply(QuizAction::SelectChoice("AES".into()))
        .apply(QuizAction::ToggleAnswers);
    assert_eq!(state.view().unwrap().is_correct, Some(false));
    let state = state.apply(QuizAction::SelectChoice("ChaCha20".into()));
    assert_eq!(state.view().unwrap().is_correct, Some(true));

    // Match: swapped definitions are wrong until fixed.
    let state = state
        .apply(QuizAction::Next)
        .apply(QuizAction::ChooseDefinition {
            term_index: 0,
            definition: "Detects intrusions".into(),
        })
        .apply(QuizAction::ChooseDefinition {
            term_index: 1,
            definition: "Filters traffic".into(),
        })
        .apply(QuizAction::ToggleAnswers);
    let view = state.view().unwrap();
    assert_eq!(view.is_correct, Some(false));
    assert!(matches!(view.correct_answers, Some(CorrectAnswers::Pairs(ref p)) if p.len() == 2));
    assert!(view.question.image().is_some());

    let state = state
        .apply(QuizAction::ChooseDefinition {
            term_index: 0,
            definition: "Filters traffic".into(),
        })
        .apply(QuizAction::ChooseDefinition {
            term_index: 1,
            definition: "Detects intrusions".into(),
        });
    assert_eq!(state.view().unwrap().is_correct, Some(true));

    // Going back shows the earlier answers and reveal flags untouched.
    let state = state.apply(QuizAction::JumpTo("1".into()));
    let view = state.view().unwrap();
    assert!(view.revealed);
    assert_eq!(view.response, Response::Single(Some("443".into())));
}

#[test]
fn shuffled_session_is_a_permutation_of_the_source() {
    let source = source("permutation");
    let expected: HashSet<QuestionId> = source
        .load_questions()
        .unwrap()
        .iter()
        .map(|q| q.id())
        .collect();

    for seed in 0..20 {
        let state = QuizService::new(fixed_clock(), source.clone())
            .with_seed(Some(seed))
            .start()
            .unwrap();
        let session = state.session().unwrap();
        let ids: HashSet<QuestionId> = session.questions().iter().map(|q| q.id()).collect();
        assert_eq!(session.total(), 3);
        assert_eq!(ids, expected);
    }
}

#[test]
fn uninitialized_state_ignores_everything() {
    let state = QuizState::new()
        .apply(QuizAction::Key(NavKey::ArrowRight))
        .apply(QuizAction::JumpTo("2".into()))
        .apply(QuizAction::ToggleAnswers);
    assert!(!state.is_ready());
    assert!(state.view().is_none());
}
