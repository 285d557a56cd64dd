use quiz_core::model::{
    Choice, ImageRef, MatchPair, Question, QuestionDraft, QuestionId, QuestionKind,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::repository::StorageError;

/// On-disk shape of a question in `questions_database.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(deserialize_with = "deserialize_question_id")]
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: String,
    pub question: String,
    #[serde(default, alias = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<PairRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRecord {
    pub term: String,
    pub definition: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        let choices = question.choices();
        let pairs = question.pairs();
        Self {
            id: question.id(),
            kind: question.kind().as_str().to_string(),
            question: question.prompt().to_string(),
            image: question.image().map(ToString::to_string),
            choices: (!choices.is_empty()).then(|| {
                choices
                    .iter()
                    .map(|c| ChoiceRecord {
                        text: c.text.clone(),
                        correct: c.correct,
                    })
                    .collect()
            }),
            pairs: (!pairs.is_empty()).then(|| {
                pairs
                    .iter()
                    .map(|p| PairRecord {
                        term: p.term.clone(),
                        definition: p.definition.clone(),
                    })
                    .collect()
            }),
        }
    }

    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidRecord` if the type, image, or body is invalid.
    pub fn into_question(self) -> Result<Question, StorageError> {
        let id = self.id;
        let invalid = |source: quiz_core::Error| StorageError::InvalidRecord { id, source };

        let kind: QuestionKind = self
            .kind
            .parse()
            .map_err(|e| invalid(quiz_core::Error::from(e)))?;

        // A blank image field means no image.
        let image = match self.image.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(ImageRef::parse(raw).map_err(|e| invalid(e.into()))?),
        };

        let choices = self
            .choices
            .unwrap_or_default()
            .into_iter()
            .map(|c| Choice::new(c.text, c.correct))
            .collect();
        let pairs = self
            .pairs
            .unwrap_or_default()
            .into_iter()
            .map(|p| MatchPair::new(p.term, p.definition))
            .collect();

        QuestionDraft {
            id,
            kind,
            prompt: self.question,
            image,
            choices,
            pairs,
        }
        .validate()
        .map_err(|e| invalid(e.into()))
    }
}

/// Parse a JSON array of question records into validated questions.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidRecord` for the first record that fails validation.
pub fn questions_from_json(raw: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    records
        .into_iter()
        .map(QuestionRecord::into_question)
        .collect()
}

/// Question ids may be written as numbers or numeric strings.
fn deserialize_question_id<'de, D: Deserializer<'de>>(d: D) -> Result<QuestionId, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = QuestionId;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("non-negative integer or numeric string")
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<QuestionId, E> {
            Ok(QuestionId::new(v))
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<QuestionId, E> {
            u64::try_from(v)
                .map(QuestionId::new)
                .map_err(|_| E::custom(format!("negative question id: {v}")))
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<QuestionId, E> {
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}
