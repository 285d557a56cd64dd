use std::collections::BTreeSet;

use crate::model::question::QuestionKind;

/// A user's current answer, shaped by the question variant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Selected choice text, `None` when nothing is selected.
    Single(Option<String>),
    /// Selected choice texts.
    Multiple(BTreeSet<String>),
    /// Definition chosen for each term, aligned with the question's pairs.
    Match(Vec<Option<String>>),
}

impl Response {
    /// The unanswered value for a question kind.
    #[must_use]
    pub fn empty_for(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Single => Response::Single(None),
            QuestionKind::Multiple => Response::Multiple(BTreeSet::new()),
            QuestionKind::Match => Response::Match(Vec::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Response::Single(_) => QuestionKind::Single,
            Response::Multiple(_) => QuestionKind::Multiple,
            Response::Match(_) => QuestionKind::Match,
        }
    }

    /// True when nothing has been selected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Response::Single(selected) => selected.is_none(),
            Response::Multiple(selected) => selected.is_empty(),
            Response::Match(slots) => slots.iter().all(Option::is_none),
        }
    }

    /// Whether `text` is currently selected (single and multiple only).
    #[must_use]
    pub fn is_selected(&self, text: &str) -> bool {
        match self {
            Response::Single(selected) => selected.as_deref() == Some(text),
            Response::Multiple(selected) => selected.contains(text),
            Response::Match(_) => false,
        }
    }

    /// Definition chosen for the term at `index`, if any.
    #[must_use]
    pub fn match_slot(&self, index: usize) -> Option<&str> {
        match self {
            Response::Match(slots) => slots.get(index).and_then(|s| s.as_deref()),
            _ => None,
        }
    }
}
