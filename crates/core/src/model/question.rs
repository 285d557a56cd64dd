use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{ids::QuestionId, media::ImageRef};

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// Answer shape of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Exactly one choice is correct; one may be selected.
    Single,
    /// One or more choices are correct; any subset may be selected.
    Multiple,
    /// Each term is paired with a definition.
    Match,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Single => "single",
            QuestionKind::Multiple => "multiple",
            QuestionKind::Match => "match",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            "match" => Ok(Self::Match),
            other => Err(QuestionError::UnknownKind(other.to_string())),
        }
    }
}

//
// ─── BUILDING BLOCKS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub correct: bool,
}

impl Choice {
    #[must_use]
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    pub term: String,
    pub definition: String,
}

impl MatchPair {
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum QuestionBody {
    Single(Vec<Choice>),
    Multiple(Vec<Choice>),
    Match(Vec<MatchPair>),
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("unknown question type: {0:?}")]
    UnknownKind(String),

    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("choice question has no choices")]
    NoChoices,

    #[error("match question has no pairs")]
    NoPairs,

    #[error("{kind} question populates the wrong answer list")]
    MismatchedBody { kind: QuestionKind },

    #[error("single question needs exactly one correct choice, found {found}")]
    SingleNeedsOneCorrect { found: usize },

    #[error("multiple question needs at least one correct choice")]
    MultipleNeedsCorrect,

    #[error("choice text cannot be empty")]
    EmptyChoiceText,

    #[error("duplicate choice text: {0:?}")]
    DuplicateChoice(String),

    #[error("match term and definition cannot be empty")]
    EmptyPairText,
}

//
// ─── DRAFT (unvalidated input) ─────────────────────────────────────────────────
//

/// Question as handed over by a data source, before invariants are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub prompt: String,
    pub image: Option<ImageRef>,
    pub choices: Vec<Choice>,
    pub pairs: Vec<MatchPair>,
}

impl QuestionDraft {
    #[must_use]
    pub fn choices(
        id: QuestionId,
        kind: QuestionKind,
        prompt: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id,
            kind,
            prompt: prompt.into(),
            image: None,
            choices,
            pairs: Vec::new(),
        }
    }

    #[must_use]
    pub fn matching(id: QuestionId, prompt: impl Into<String>, pairs: Vec<MatchPair>) -> Self {
        Self {
            id,
            kind: QuestionKind::Match,
            prompt: prompt.into(),
            image: None,
            choices: Vec::new(),
            pairs,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Check the per-variant invariants and produce an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` describing the first violated invariant.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let body = match self.kind {
            QuestionKind::Single | QuestionKind::Multiple => {
                if !self.pairs.is_empty() {
                    return Err(QuestionError::MismatchedBody { kind: self.kind });
                }
                validate_choices(self.kind, &self.choices)?;
                if self.kind == QuestionKind::Single {
                    QuestionBody::Single(self.choices)
                } else {
                    QuestionBody::Multiple(self.choices)
                }
            }
            QuestionKind::Match => {
                if !self.choices.is_empty() {
                    return Err(QuestionError::MismatchedBody { kind: self.kind });
                }
                if self.pairs.is_empty() {
                    return Err(QuestionError::NoPairs);
                }
                if self
                    .pairs
                    .iter()
                    .any(|p| p.term.trim().is_empty() || p.definition.trim().is_empty())
                {
                    return Err(QuestionError::EmptyPairText);
                }
                QuestionBody::Match(self.pairs)
            }
        };

        Ok(Question {
            id: self.id,
            prompt: self.prompt,
            image: self.image,
            body,
        })
    }
}

fn validate_choices(kind: QuestionKind, choices: &[Choice]) -> Result<(), QuestionError> {
    if choices.is_empty() {
        return Err(QuestionError::NoChoices);
    }

    let mut seen = HashSet::with_capacity(choices.len());
    for choice in choices {
        if choice.text.trim().is_empty() {
            return Err(QuestionError::EmptyChoiceText);
        }
        // Responses are keyed by choice text.
        if !seen.insert(choice.text.as_str()) {
            return Err(QuestionError::DuplicateChoice(choice.text.clone()));
        }
    }

    let found = choices.iter().filter(|c| c.correct).count();
    match kind {
        QuestionKind::Single if found != 1 => Err(QuestionError::SingleNeedsOneCorrect { found }),
        QuestionKind::Multiple if found == 0 => Err(QuestionError::MultipleNeedsCorrect),
        _ => Ok(()),
    }
}

//
// ─── VALIDATED QUESTION ────────────────────────────────────────────────────────
//

/// Immutable, validated quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    image: Option<ImageRef>,
    body: QuestionBody,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self.body {
            QuestionBody::Single(_) => QuestionKind::Single,
            QuestionBody::Multiple(_) => QuestionKind::Multiple,
            QuestionBody::Match(_) => QuestionKind::Match,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Choices in source order; empty for match questions.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        match &self.body {
            QuestionBody::Single(choices) | QuestionBody::Multiple(choices) => choices,
            QuestionBody::Match(_) => &[],
        }
    }

    /// Pairs in source order; empty for choice questions.
    #[must_use]
    pub fn pairs(&self) -> &[MatchPair] {
        match &self.body {
            QuestionBody::Match(pairs) => pairs,
            QuestionBody::Single(_) | QuestionBody::Multiple(_) => &[],
        }
    }

    #[must_use]
    pub fn has_choice(&self, text: &str) -> bool {
        self.choices().iter().any(|c| c.text == text)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.pairs().iter().map(|p| p.term.as_str())
    }

    /// Definitions offered as selectable options for every term.
    ///
    /// Offered in pair order, which is also the order the evaluator expects.
    pub fn definition_options(&self) -> impl Iterator<Item = &str> {
        self.pairs().iter().map(|p| p.definition.as_str())
    }
}
