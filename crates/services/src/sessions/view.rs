use quiz_core::CorrectAnswers;
use quiz_core::model::{Question, Response};

/// Presentation-agnostic snapshot of the current question.
///
/// Carries no formatted strings; hosts decide how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub question: &'a Question,
    pub response: Response,
    pub revealed: bool,
    /// Present only when revealed and correctness highlighting is enabled.
    pub is_correct: Option<bool>,
    /// Present only when revealed.
    pub correct_answers: Option<CorrectAnswers>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl QuestionView<'_> {
    /// Choices of a single/multiple question with their selection state.
    pub fn choices(&self) -> impl Iterator<Item = (&str, bool)> {
        self.question
            .choices()
            .iter()
            .map(move |c| (c.text.as_str(), self.response.is_selected(&c.text)))
    }

    /// Terms of a match question with the definition chosen for each, if any.
    pub fn match_rows(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.question
            .terms()
            .enumerate()
            .map(move |(i, term)| (term, self.response.match_slot(i)))
    }
}
