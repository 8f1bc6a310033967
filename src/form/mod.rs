//! Boundary input parsing and validation
//!
//! The strict counterpart to the permissive generation core: free-text input
//! is parsed here and rejected with a user-visible message before the
//! generator is ever called. The TUI status line and the CLI both print
//! [`FormError`]'s `Display` text as-is.

use thiserror::Error;

use crate::bank::Level;

/// Validation errors shown directly to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The concept list was empty after trimming
    #[error("Please enter at least one concept.")]
    NoConcepts,

    /// The count field did not parse as a positive integer
    #[error("Number of questions must be a positive number.")]
    InvalidCount,

    /// The level name is not in the catalog (CLI only; the TUI selector
    /// cannot produce one)
    #[error("Unknown level '{0}'. Run `quizforge levels` to list them.")]
    UnknownLevel(String),
}

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillRequest {
    /// Trimmed, non-empty concept names, in input order
    pub concepts: Vec<String>,
    /// Recognized difficulty level
    pub level: Level,
    /// Number of records to generate (always >= 1)
    pub count: usize,
}

impl DrillRequest {
    /// Validate raw field text into a request.
    ///
    /// `concepts_text` is split on commas with entries trimmed and empties
    /// discarded; `count_text` must parse as a positive base-10 integer.
    pub fn from_fields(
        concepts_text: &str,
        level: Level,
        count_text: &str,
    ) -> Result<Self, FormError> {
        let concepts = parse_concepts(concepts_text);
        if concepts.is_empty() {
            return Err(FormError::NoConcepts);
        }
        let count = parse_count(count_text)?;
        Ok(Self { concepts, level, count })
    }
}

/// Split a free-text field into trimmed, non-empty concept names
pub fn parse_concepts(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the count field as a positive base-10 integer
pub fn parse_count(text: &str) -> Result<usize, FormError> {
    match text.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(FormError::InvalidCount),
    }
}

/// Parse a level name, rejecting anything outside the catalog
pub fn parse_level(name: &str) -> Result<Level, FormError> {
    Level::from_name(name).ok_or_else(|| FormError::UnknownLevel(name.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn concepts_are_split_trimmed_and_filtered() {
        let parsed = parse_concepts(" Welding ,, Pipe Fitting ,  ");
        assert_eq!(parsed, vec!["Welding".to_string(), "Pipe Fitting".to_string()]);
    }

    #[test]
    fn whitespace_only_input_yields_no_concepts() {
        assert!(parse_concepts("  , ,  ").is_empty());
        assert!(parse_concepts("").is_empty());
    }

    #[test]
    fn concept_order_is_preserved() {
        assert_eq!(parse_concepts("b, a, c"), vec!["b", "a", "c"]);
    }

    #[test]
    fn count_accepts_positive_integers() {
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count(" 12 "), Ok(12));
    }

    #[test]
    fn count_rejects_zero_negative_and_garbage() {
        assert_eq!(parse_count("0"), Err(FormError::InvalidCount));
        assert_eq!(parse_count("-3"), Err(FormError::InvalidCount));
        assert_eq!(parse_count("five"), Err(FormError::InvalidCount));
        assert_eq!(parse_count(""), Err(FormError::InvalidCount));
    }

    #[test]
    fn empty_concepts_are_rejected_before_count() {
        let err = DrillRequest::from_fields("  ", Level::Recall, "not-a-number");
        assert_eq!(err, Err(FormError::NoConcepts));
    }

    #[test]
    fn valid_fields_build_a_request() {
        let request = DrillRequest::from_fields("Welding, Soldering", Level::Procedure, "4");
        assert_eq!(
            request,
            Ok(DrillRequest {
                concepts: vec!["Welding".into(), "Soldering".into()],
                level: Level::Procedure,
                count: 4,
            })
        );
    }

    #[test]
    fn unknown_level_names_are_rejected_with_the_offending_name() {
        let err = parse_level("NotALevel").unwrap_err();
        assert_eq!(err.to_string(), "Unknown level 'NotALevel'. Run `quizforge levels` to list them.");
    }

    #[test]
    fn error_messages_match_the_user_facing_text() {
        assert_eq!(FormError::NoConcepts.to_string(), "Please enter at least one concept.");
        assert_eq!(
            FormError::InvalidCount.to_string(),
            "Number of questions must be a positive number."
        );
    }
}
