use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

use quiz_core::model::{Question, QuestionKind, Response};
use quiz_core::{correct_answers, is_correct};

use super::navigation::Navigator;
use super::plan::QuestionSetBuilder;
use super::responses::ResponseStore;
use super::settings::QuizSettings;
use super::view::QuestionView;
use super::workflow::QuizAction;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session over a fixed working set.
///
/// The working set never changes after construction; responses are keyed by
/// question id and visibility by position.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    navigator: Navigator,
    responses: ResponseStore,
    settings: QuizSettings,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Create a session over an already ordered working set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(
        questions: Vec<Question>,
        settings: QuizSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            navigator: Navigator::new(questions.len()),
            questions,
            responses: ResponseStore::new(),
            settings,
            started_at,
        })
    }

    /// Build the working set from `source` (shuffled per `settings`) and start a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `source` is empty.
    pub fn start<R: Rng + ?Sized>(
        source: &[Question],
        settings: QuizSettings,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let ordered = QuestionSetBuilder::new()
            .with_shuffle(settings.shuffle())
            .build_with_rng(source, rng);
        Self::new(ordered, settings, started_at)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.navigator.position()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.navigator.position()]
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.navigator.is_revealed(position)
    }

    /// Response to the current question, or its empty value.
    #[must_use]
    pub fn current_response(&self) -> Response {
        self.responses.get_response(self.current_question())
    }

    /// Verdict for the current question, available only while its answers are revealed.
    #[must_use]
    pub fn current_is_correct(&self) -> Option<bool> {
        if !self.is_revealed(self.position()) {
            return None;
        }
        Some(is_correct(self.current_question(), &self.current_response()))
    }

    /// Snapshot of the current question for presentation.
    #[must_use]
    pub fn view(&self) -> QuestionView<'_> {
        let question = self.current_question();
        let response = self.current_response();
        let revealed = self.is_revealed(self.position());
        let verdict = (revealed && self.settings.highlight_correctness())
            .then(|| is_correct(question, &response));

        QuestionView {
            number: self.position() + 1,
            total: self.total(),
            question,
            response,
            revealed,
            is_correct: verdict,
            correct_answers: revealed.then(|| correct_answers(question)),
            can_go_previous: self.navigator.can_go_previous(),
            can_go_next: self.navigator.can_go_next(),
        }
    }

    /// Apply one input action. Returns whether the session changed.
    pub fn apply(&mut self, action: QuizAction) -> bool {
        match action {
            QuizAction::SelectChoice(text) => self.select_choice(&text),
            QuizAction::ChooseDefinition {
                term_index,
                definition,
            } => self.choose_definition(term_index, &definition),
            QuizAction::Next => self.navigator.next(),
            QuizAction::Previous => self.navigator.previous(),
            QuizAction::JumpTo(raw) => self.navigator.jump_to(&raw),
            QuizAction::ToggleAnswers => {
                let position = self.position();
                self.navigator.toggle_visibility(position)
            }
            QuizAction::Key(key) => self.apply(key.action()),
        }
    }

    /// Select (single) or toggle (multiple) a choice of the current question.
    ///
    /// Ignored for match questions and for text that is not one of the choices.
    pub fn select_choice(&mut self, text: &str) -> bool {
        let question = &self.questions[self.navigator.position()];
        if !question.has_choice(text) {
            tracing::debug!(question = %question.id(), choice = text, "ignoring unknown choice");
            return false;
        }

        match question.kind() {
            QuestionKind::Single => self.responses.set_single(question.id(), text),
            QuestionKind::Multiple => self.responses.toggle_multiple(question.id(), text),
            QuestionKind::Match => return false,
        }
        true
    }

    /// Choose the definition for term `term_index` of the current match question.
    ///
    /// An empty definition clears the term. Ignored for choice questions, an
    /// out-of-range term, or a definition that is not offered.
    pub fn choose_definition(&mut self, term_index: usize, definition: &str) -> bool {
        let question = &self.questions[self.navigator.position()];
        if question.kind() != QuestionKind::Match || term_index >= question.pairs().len() {
            tracing::debug!(question = %question.id(), term_index, "ignoring match selection");
            return false;
        }
        if !definition.is_empty() && !question.definition_options().any(|d| d == definition) {
            tracing::debug!(question = %question.id(), definition, "ignoring unknown definition");
            return false;
        }

        self.responses
            .set_match_selection(question.id(), term_index, definition);
        true
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("position", &self.navigator.position())
            .field("responses_len", &self.responses.len())
            .field("settings", &self.settings)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
