use std::collections::HashMap;

use quiz_core::model::{Question, QuestionId, Response};

/// Current answers of a session, keyed by question id.
///
/// Entries are created on first interaction and never removed. Each mutation
/// touches only the entry of the question it names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    entries: HashMap<QuestionId, Response>,
}

impl ResponseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored response for `question`, or the empty value for its kind.
    ///
    /// A stored value of the wrong shape also reads as empty.
    #[must_use]
    pub fn get_response(&self, question: &Question) -> Response {
        match self.entries.get(&question.id()) {
            Some(response) if response.kind() == question.kind() => response.clone(),
            _ => Response::empty_for(question.kind()),
        }
    }

    /// Raw stored entry, if the question has been interacted with.
    #[must_use]
    pub fn stored(&self, id: QuestionId) -> Option<&Response> {
        self.entries.get(&id)
    }

    /// Select `choice` for a single-answer question; selecting it again clears it.
    pub fn set_single(&mut self, id: QuestionId, choice: &str) {
        let entry = self
            .entries
            .entry(id)
            .or_insert(Response::Single(None));
        match entry {
            Response::Single(selected) if selected.as_deref() == Some(choice) => *selected = None,
            Response::Single(selected) => *selected = Some(choice.to_string()),
            other => *other = Response::Single(Some(choice.to_string())),
        }
    }

    /// Add `choice` to a multiple-answer selection, or remove it if present.
    pub fn toggle_multiple(&mut self, id: QuestionId, choice: &str) {
        let entry = self
            .entries
            .entry(id)
            .or_insert_with(|| Response::Multiple(Default::default()));
        if !matches!(entry, Response::Multiple(_)) {
            *entry = Response::Multiple(Default::default());
        }
        if let Response::Multiple(selected) = entry {
            if !selected.remove(choice) {
                selected.insert(choice.to_string());
            }
        }
    }

    /// Write the definition chosen for the term at `pair_index`.
    ///
    /// The sequence is padded with unset slots so the index is addressable. An
    /// empty definition unsets the slot.
    pub fn set_match_selection(&mut self, id: QuestionId, pair_index: usize, definition: &str) {
        let entry = self
            .entries
            .entry(id)
            .or_insert_with(|| Response::Match(Vec::new()));
        if !matches!(entry, Response::Match(_)) {
            *entry = Response::Match(Vec::new());
        }
        if let Response::Match(slots) = entry {
            if slots.len() <= pair_index {
                slots.resize(pair_index + 1, None);
            }
            slots[pair_index] = (!definition.is_empty()).then(|| definition.to_string());
        }
    }

    /// Number of questions that have been interacted with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
