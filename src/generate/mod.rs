//! Drill-set generation
//!
//! The core of quizforge: given a concept list, a level name, and a count,
//! produce that many randomized question/answer-hint records from the bank.
//!
//! The core is deliberately permissive: any invalid combination (unknown
//! level, no concepts, zero count) yields an empty set rather than an error.
//! Strict validation with user-visible messages lives at the boundary in
//! [`crate::form`]; the two layers are intentionally redundant.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bank::{TemplateBank, PLACEHOLDER};

/// One generated question/answer-hint record
///
/// Records are created fresh per generation and carry no identity beyond
/// their position in the output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQa {
    /// Question text with the concept substituted in
    pub question: String,
    /// The hint paired with the chosen template, copied verbatim
    pub answer_hint: String,
}

impl TemplateBank {
    /// Generate `count` records using the process default random source.
    ///
    /// See [`TemplateBank::generate_with_rng`] for the full contract.
    pub fn generate(&self, concepts: &[String], level: &str, count: usize) -> Vec<GeneratedQa> {
        self.generate_with_rng(concepts, level, count, &mut rand::thread_rng())
    }

    /// Generate `count` records, drawing randomness from `rng`.
    ///
    /// For each output position, independently and uniformly: one template
    /// index is chosen from the level's entries and one concept from
    /// `concepts`, both with replacement. The concept replaces the first
    /// `{concept}` occurrence in the template (templates only ever carry one,
    /// but only the first is replaced by design); the answer hint is the one
    /// paired with the chosen template, untouched.
    ///
    /// An unrecognized `level`, an empty `concepts` slice, or a zero `count`
    /// yields an empty vec. This is a degradation policy, not a failure
    /// signal: the function has no error conditions.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        concepts: &[String],
        level: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<GeneratedQa> {
        let Some(spec) = self.spec_by_name(level) else {
            return Vec::new();
        };
        if concepts.is_empty() || count == 0 {
            return Vec::new();
        }

        (0..count)
            .map(|_| {
                let entry = &spec.entries[rng.gen_range(0..spec.entries.len())];
                let concept = &concepts[rng.gen_range(0..concepts.len())];
                GeneratedQa {
                    question: entry.template.replacen(PLACEHOLDER, concept, 1),
                    answer_hint: entry.answer_hint.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::bank::{bank, Level};

    /// An Rng that always returns the low end of any requested range
    #[derive(Debug, Clone)]
    struct ZeroRng;

    impl rand::RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    fn concepts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_input_yields_exactly_count_records() {
        let qa = bank().generate(&concepts(&["Welding"]), "Recall", 3);
        assert_eq!(qa.len(), 3);
    }

    #[test]
    fn recall_questions_come_from_the_recall_templates() {
        let subjects = concepts(&["Welding"]);
        let qa = bank().generate(&subjects, "Recall", 10);

        let spec = bank().spec(Level::Recall);
        for record in &qa {
            let matched = spec.entries.iter().any(|entry| {
                record.question == entry.template.replacen(PLACEHOLDER, "Welding", 1)
                    && record.answer_hint == entry.answer_hint
            });
            assert!(matched, "unexpected record: {:?}", record);
        }
    }

    #[test]
    fn empty_concepts_yield_empty_set() {
        assert_eq!(bank().generate(&[], "Recall", 3), Vec::new());
    }

    #[test]
    fn unknown_level_yields_empty_set() {
        let qa = bank().generate(&concepts(&["X"]), "NotALevel", 2);
        assert_eq!(qa, Vec::new());
    }

    #[test]
    fn zero_count_yields_empty_set() {
        let qa = bank().generate(&concepts(&["A", "B"]), "Procedure", 0);
        assert_eq!(qa, Vec::new());
    }

    #[test]
    fn deterministic_rng_pins_the_first_troubleshooting_entry() {
        let qa = bank().generate_with_rng(
            &concepts(&["Pipe Fitting"]),
            "Troubleshooting",
            1,
            &mut ZeroRng,
        );

        assert_eq!(
            qa,
            vec![GeneratedQa {
                question: "If a system fails to initiate after performing **Pipe Fitting**, \
                           what are the first three checks you would perform?"
                    .to_string(),
                answer_hint: "List three logical steps for fault isolation.".to_string(),
            }]
        );
    }

    #[test]
    fn only_the_first_placeholder_occurrence_is_replaced() {
        // The bank never carries two placeholders, but the substitution rule
        // is first-occurrence-only and stays that way.
        let doubled = "Compare {concept} with {concept}.".replacen(PLACEHOLDER, "Brazing", 1);
        assert_eq!(doubled, "Compare Brazing with {concept}.");
    }

    #[test]
    fn seeded_rng_gives_reproducible_sets() {
        let subjects = concepts(&["Welding", "Soldering"]);
        let a = bank().generate_with_rng(&subjects, "Procedure", 5, &mut StdRng::seed_from_u64(7));
        let b = bank().generate_with_rng(&subjects, "Procedure", 5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let subjects = concepts(&["Welding", "Soldering"]);
        let before = subjects.clone();
        let _ = bank().generate(&subjects, "Recall", 4);
        assert_eq!(subjects, before);
    }

    proptest! {
        #[test]
        fn output_length_always_matches_count(
            subjects in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,12}", 1..5),
            level_idx in 0usize..3,
            count in 1usize..50,
        ) {
            let level = Level::ALL[level_idx];
            let qa = bank().generate(&subjects, level.name(), count);
            prop_assert_eq!(qa.len(), count);
        }

        #[test]
        fn no_record_leaks_an_unsubstituted_placeholder(
            subjects in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,12}", 1..5),
            level_idx in 0usize..3,
            count in 1usize..20,
        ) {
            let level = Level::ALL[level_idx];
            for record in bank().generate(&subjects, level.name(), count) {
                prop_assert!(!record.question.contains(PLACEHOLDER));
            }
        }

        #[test]
        fn every_hint_is_one_of_the_levels_hints(
            subjects in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,12}", 1..5),
            level_idx in 0usize..3,
            count in 1usize..20,
        ) {
            let level = Level::ALL[level_idx];
            let spec = bank().spec(level);
            for record in bank().generate(&subjects, level.name(), count) {
                prop_assert!(spec.entries.iter().any(|e| e.answer_hint == record.answer_hint));
            }
        }

        #[test]
        fn every_question_embeds_a_supplied_concept(
            subjects in proptest::collection::vec("[A-Za-z][A-Za-z]{0,12}", 1..5),
            level_idx in 0usize..3,
            count in 1usize..20,
        ) {
            let level = Level::ALL[level_idx];
            for record in bank().generate(&subjects, level.name(), count) {
                prop_assert!(subjects.iter().any(|c| record.question.contains(c.as_str())));
            }
        }
    }
}
