use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Materializes the working set: every question exactly once, in session order.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSetBuilder {
    shuffle: bool,
}

impl Default for QuestionSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self { shuffle: true }
    }

    /// Enable or disable shuffling; when disabled the source order is kept.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Build the working set using the thread-local RNG.
    #[must_use]
    pub fn build(self, questions: &[Question]) -> Vec<Question> {
        self.build_with_rng(questions, &mut rng())
    }

    /// Build the working set with a caller-supplied RNG.
    ///
    /// The source slice is left untouched. Shuffling is a uniform Fisher-Yates
    /// permutation.
    pub fn build_with_rng<R: Rng + ?Sized>(self, questions: &[Question], rng: &mut R) -> Vec<Question> {
        let mut ordered = questions.to_vec();
        if self.shuffle {
            ordered.as_mut_slice().shuffle(rng);
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Choice, QuestionDraft, QuestionId, QuestionKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn build_question(id: u64) -> Question {
        QuestionDraft::choices(
            QuestionId::new(id),
            QuestionKind::Single,
            format!("Q{id}"),
            vec![Choice::new("yes", true), Choice::new("no", false)],
        )
        .validate()
        .unwrap()
    }

    fn ids(questions: &[Question]) -> Vec<u64> {
        questions.iter().map(|q| q.id().value()).collect()
    }

    #[test]
    fn shuffled_set_is_a_permutation() {
        let source: Vec<Question> = (1..=25).map(build_question).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let ordered = QuestionSetBuilder::new().build_with_rng(&source, &mut rng);
            assert_eq!(ordered.len(), source.len());
            let mut sorted = ids(&ordered);
            sorted.sort_unstable();
            assert_eq!(sorted, ids(&source));
        }
    }

    #[test]
    fn source_is_not_mutated() {
        let source: Vec<Question> = (1..=10).map(build_question).collect();
        let before = ids(&source);
        let _ = QuestionSetBuilder::new().build(&source);
        assert_eq!(ids(&source), before);
    }

    #[test]
    fn shuffle_disabled_keeps_source_order() {
        let source: Vec<Question> = (1..=5).map(build_question).collect();
        let ordered = QuestionSetBuilder::new().with_shuffle(false).build(&source);
        assert_eq!(ids(&ordered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let source: Vec<Question> = (1..=10).map(build_question).collect();
        let a = QuestionSetBuilder::new().build_with_rng(&source, &mut StdRng::seed_from_u64(3));
        let b = QuestionSetBuilder::new().build_with_rng(&source, &mut StdRng::seed_from_u64(3));
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn every_permutation_is_equally_likely() {
        let source: Vec<Question> = (1..=3).map(build_question).collect();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let rounds = 60_000;
        let mut counts: HashMap<Vec<u64>, u32> = HashMap::new();

        for _ in 0..rounds {
            let ordered = QuestionSetBuilder::new().build_with_rng(&source, &mut rng);
            *counts.entry(ids(&ordered)).or_default() += 1;
        }

        // 3! orderings, each expected 10_000 times.
        assert_eq!(counts.len(), 6);
        for (order, count) in counts {
            assert!(
                (9_000..=11_000).contains(&count),
                "ordering {order:?} seen {count} times"
            );
        }
    }

    #[test]
    fn empty_and_singleton_sets() {
        assert!(QuestionSetBuilder::new().build(&[]).is_empty());
        let one = vec![build_question(1)];
        assert_eq!(ids(&QuestionSetBuilder::new().build(&one)), vec![1]);
    }
}
