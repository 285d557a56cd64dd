use std::fmt::Write;

use quiz_core::CorrectAnswers;
use services::QuestionView;

/// Plain-text rendering of a question view.
pub fn render(view: &QuestionView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Question {} of {}", view.number, view.total);
    let _ = writeln!(out, "{}", view.question.prompt());
    if let Some(image) = view.question.image() {
        let _ = writeln!(out, "[image: {image}]");
    }

    for (i, (text, selected)) in view.choices().enumerate() {
        let mark = if selected { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {}. {text}", i + 1);
    }

    let rows: Vec<_> = view.match_rows().collect();
    if !rows.is_empty() {
        for (i, (term, chosen)) in rows.into_iter().enumerate() {
            let _ = writeln!(out, "  {}. {term} -> {}", i + 1, chosen.unwrap_or("-- Select an option --"));
        }
        let _ = writeln!(out, "  Options:");
        for (j, definition) in view.question.definition_options().enumerate() {
            let _ = writeln!(out, "    {}. {definition}", j + 1);
        }
    }

    if let Some(answers) = &view.correct_answers {
        match answers {
            CorrectAnswers::Choices(texts) => {
                let _ = writeln!(out, "Correct answer:");
                for text in texts {
                    let _ = writeln!(out, "  - {text}");
                }
            }
            CorrectAnswers::Pairs(pairs) => {
                for pair in pairs {
                    let _ = writeln!(out, "Answer: {} -> {}", pair.term, pair.definition);
                }
            }
        }
    }
    match view.is_correct {
        Some(true) => out.push_str("Result: correct\n"),
        Some(false) => out.push_str("Result: incorrect\n"),
        None => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Choice, QuestionDraft, QuestionId, QuestionKind};
    use quiz_core::time::fixed_now;
    use services::{QuizAction, QuizSession, QuizSettings};

    #[test]
    fn renders_selection_and_revealed_answers() {
        let question = QuestionDraft::choices(
            QuestionId::new(1),
            QuestionKind::Single,
            "HTTPS port?",
            vec![Choice::new("80", false), Choice::new("443", true)],
        )
        .validate()
        .unwrap();
        let mut session =
            QuizSession::new(vec![question], QuizSettings::default(), fixed_now()).unwrap();
        session.apply(QuizAction::SelectChoice("80".into()));

        let text = render(&session.view());
        assert!(text.starts_with("Question 1 of 1\nHTTPS port?\n"));
        assert!(text.contains("[x] 1. 80"));
        assert!(text.contains("[ ] 2. 443"));
        assert!(!text.contains("Correct answer"));

        session.apply(QuizAction::ToggleAnswers);
        let text = render(&session.view());
        assert!(text.contains("Correct answer:\n  - 443"));
        assert!(text.contains("Result: incorrect"));
    }
}
