//! Correctness checks for a question/response pair.
//!
//! Evaluation is pure and total: a response whose shape does not fit the
//! question is simply incorrect.

use std::collections::BTreeSet;

use crate::model::{MatchPair, Question, QuestionKind, Response};

/// Canonical answers of a question, for display once answers are revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectAnswers {
    /// Texts of the choices flagged correct, in choice order.
    Choices(Vec<String>),
    /// Each term with its definition, in pair order.
    Pairs(Vec<MatchPair>),
}

/// Returns whether `response` answers `question` correctly.
///
/// - single: the selected text equals the one correct choice
/// - multiple: the selection equals the set of correct choices, no partial credit
/// - match: slot `i` holds `pairs[i].definition` for every pair, and nothing more
#[must_use]
pub fn is_correct(question: &Question, response: &Response) -> bool {
    match (question.kind(), response) {
        (QuestionKind::Single, Response::Single(selected)) => {
            let Some(selected) = selected else {
                return false;
            };
            question
                .choices()
                .iter()
                .find(|c| c.correct)
                .is_some_and(|c| c.text == *selected)
        }
        (QuestionKind::Multiple, Response::Multiple(selected)) => {
            let correct: BTreeSet<&str> = question
                .choices()
                .iter()
                .filter(|c| c.correct)
                .map(|c| c.text.as_str())
                .collect();
            correct.len() == selected.len() && selected.iter().all(|s| correct.contains(s.as_str()))
        }
        (QuestionKind::Match, Response::Match(slots)) => {
            let pairs = question.pairs();
            slots.len() == pairs.len()
                && pairs
                    .iter()
                    .zip(slots)
                    .all(|(pair, slot)| slot.as_deref() == Some(pair.definition.as_str()))
        }
        _ => false,
    }
}

/// Returns the answers to show when a question is revealed.
#[must_use]
pub fn correct_answers(question: &Question) -> CorrectAnswers {
    match question.kind() {
        QuestionKind::Single | QuestionKind::Multiple => CorrectAnswers::Choices(
            question
                .choices()
                .iter()
                .filter(|c| c.correct)
                .map(|c| c.text.clone())
                .collect(),
        ),
        QuestionKind::Match => CorrectAnswers::Pairs(question.pairs().to_vec()),
    }
}
