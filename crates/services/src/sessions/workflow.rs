use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};
use std::sync::Arc;

use quiz_core::model::Question;
use storage::QuestionSource;

use super::keys::NavKey;
use super::service::QuizSession;
use super::settings::QuizSettings;
use super::view::QuestionView;
use crate::Clock;
use crate::error::SessionError;

/// Every input the quiz accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Select/deselect (single) or toggle (multiple) a choice by its text.
    SelectChoice(String),
    /// Choose a definition for a term of a match question; empty clears it.
    ChooseDefinition {
        term_index: usize,
        definition: String,
    },
    Next,
    Previous,
    /// Raw 1-based question number as typed by the user.
    JumpTo(String),
    /// Flip answer visibility of the current question.
    ToggleAnswers,
    Key(NavKey),
}

/// Lifecycle of a quiz: waiting for the question set, then running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Loading,
    Ready(QuizSession),
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::Loading
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, QuizState::Ready(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match self {
            QuizState::Ready(session) => Some(session),
            QuizState::Loading => None,
        }
    }

    /// Current question snapshot, `None` while loading.
    #[must_use]
    pub fn view(&self) -> Option<QuestionView<'_>> {
        self.session().map(QuizSession::view)
    }

    /// Materialize the working set once.
    ///
    /// A state that is already ready is returned unchanged, so repeated loads
    /// never reshuffle. An empty collection leaves the state loading.
    #[must_use]
    pub fn load_with_rng<R: Rng + ?Sized>(
        self,
        questions: &[Question],
        settings: QuizSettings,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        if self.is_ready() {
            tracing::debug!("question set already loaded, keeping current order");
            return self;
        }

        match QuizSession::start(questions, settings, rng, started_at) {
            Ok(session) => {
                tracing::info!(
                    questions = session.total(),
                    shuffled = settings.shuffle(),
                    "quiz session started"
                );
                QuizState::Ready(session)
            }
            Err(err) => {
                tracing::debug!(%err, "quiz not started");
                QuizState::Loading
            }
        }
    }

    /// Transition function: the next state after `action`.
    ///
    /// Every action is ignored while loading.
    #[must_use]
    pub fn apply(self, action: QuizAction) -> Self {
        match self {
            QuizState::Loading => {
                tracing::debug!(?action, "ignoring action before questions are loaded");
                QuizState::Loading
            }
            QuizState::Ready(mut session) => {
                if !session.apply(action.clone()) {
                    tracing::debug!(?action, "action left session unchanged");
                }
                QuizState::Ready(session)
            }
        }
    }
}

/// Starts quiz sessions from a question source.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    source: Arc<dyn QuestionSource + Send + Sync>,
    settings: QuizSettings,
    seed: Option<u64>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource + Send + Sync>) -> Self {
        Self {
            clock,
            source,
            settings: QuizSettings::default(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Seed the shuffle for a reproducible question order.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Load the question collection and start a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the source fails and
    /// `SessionError::Empty` if it holds no questions.
    pub fn start(&self) -> Result<QuizState, SessionError> {
        let questions = self.source.load_questions()?;
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let now = self.clock.now();
        let state = match self.seed {
            Some(seed) => QuizState::new().load_with_rng(
                &questions,
                self.settings,
                &mut StdRng::seed_from_u64(seed),
                now,
            ),
            None => QuizState::new().load_with_rng(&questions, self.settings, &mut rng(), now),
        };
        Ok(state)
    }
}
