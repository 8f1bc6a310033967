//! The template bank
//!
//! This module defines the levelled question-template data model and the
//! process-wide bank the generator draws from. The bank is built once at
//! startup and never mutated; everything downstream borrows it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Placeholder token substituted with a concept name in question templates
pub const PLACEHOLDER: &str = "{concept}";

/// Difficulty levels a drill set can be generated at
///
/// This is a closed set: the selector UI and the CLI both enumerate
/// [`Level::ALL`], so a level outside the bank cannot be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Basic definitions, safety, and function
    Recall,
    /// Sequences, steps, and process justification
    Procedure,
    /// Fault diagnosis, logical thinking, and risk assessment
    Troubleshooting,
}

impl Level {
    /// All recognized levels, in display order
    pub const ALL: [Level; 3] = [Level::Recall, Level::Procedure, Level::Troubleshooting];

    /// Canonical name of the level
    pub fn name(&self) -> &'static str {
        match self {
            Level::Recall => "Recall",
            Level::Procedure => "Procedure",
            Level::Troubleshooting => "Troubleshooting",
        }
    }

    /// Parse a level from its canonical name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Level> {
        Level::ALL.iter().find(|level| level.name() == name).copied()
    }

    /// Selector label in the form `"<level> - <description>"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.name(), bank().spec(*self).description)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A question template paired with its answer hint
///
/// The template contains exactly one `{concept}` placeholder; the hint contains
/// none. Keeping the pair in one struct means the template/hint pairing cannot
/// drift through independent edits to two parallel lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Question text with one `{concept}` placeholder
    pub template: &'static str,
    /// Guidance on what a complete answer should contain
    pub answer_hint: &'static str,
}

/// The template set for one level
#[derive(Debug, Clone, Serialize)]
pub struct LevelSpec {
    /// Template/hint pairs, in bank order
    pub entries: Vec<TemplateEntry>,
    /// Human-readable description shown in the level selector
    pub description: &'static str,
}

/// The full bank: one [`LevelSpec`] per recognized level
#[derive(Debug, Clone)]
pub struct TemplateBank {
    recall: LevelSpec,
    procedure: LevelSpec,
    troubleshooting: LevelSpec,
}

impl TemplateBank {
    /// Get the spec for a level
    pub fn spec(&self, level: Level) -> &LevelSpec {
        match level {
            Level::Recall => &self.recall,
            Level::Procedure => &self.procedure,
            Level::Troubleshooting => &self.troubleshooting,
        }
    }

    /// Look up a level by name, yielding its spec if recognized
    pub fn spec_by_name(&self, name: &str) -> Option<&LevelSpec> {
        Level::from_name(name).map(|level| self.spec(level))
    }
}

/// The process-wide bank (built once, immutable thereafter)
static BANK: Lazy<TemplateBank> = Lazy::new(|| TemplateBank {
    recall: LevelSpec {
        entries: vec![
            TemplateEntry {
                template: "Define the term **{concept}**.",
                answer_hint: "Provide the precise definition.",
            },
            TemplateEntry {
                template: "What is the main function of **{concept}** in the system?",
                answer_hint: "State the primary role.",
            },
            TemplateEntry {
                template: "List the safety prerequisites for using **{concept}**.",
                answer_hint: "List 3-5 necessary safety steps.",
            },
        ],
        description: "Tests basic definitions, safety, and function.",
    },
    procedure: LevelSpec {
        entries: vec![
            TemplateEntry {
                template: "Describe the step-by-step process for performing **{concept}**.",
                answer_hint: "Outline 5-7 numbered steps.",
            },
            TemplateEntry {
                template: "What is the correct sequence of tools required to complete **{concept}**?",
                answer_hint: "List tools in order, with justification.",
            },
            TemplateEntry {
                template: "Justify the need for step 3 when executing **{concept}**.",
                answer_hint: "Explain the technical or safety reason.",
            },
        ],
        description: "Tests knowledge of sequences, steps, and process justification.",
    },
    troubleshooting: LevelSpec {
        entries: vec![
            TemplateEntry {
                template: "If a system fails to initiate after performing **{concept}**, what are the first three checks you would perform?",
                answer_hint: "List three logical steps for fault isolation.",
            },
            TemplateEntry {
                template: "A client reports a common issue related to **{concept}**. Explain a logical diagnostic pathway.",
                answer_hint: "Outline a flow chart of checks.",
            },
            TemplateEntry {
                template: "What potential hazards or errors are introduced if the tolerance for **{concept}** is ignored?",
                answer_hint: "Identify the specific risk.",
            },
        ],
        description: "Tests fault diagnosis, logical thinking, and risk assessment.",
    },
});

/// Shared reference to the process-wide bank
pub fn bank() -> &'static TemplateBank {
    &BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_three_paired_entries() {
        for level in Level::ALL {
            let spec = bank().spec(level);
            assert_eq!(spec.entries.len(), 3, "{} should have 3 entries", level);
        }
    }

    #[test]
    fn every_template_contains_exactly_one_placeholder() {
        for level in Level::ALL {
            for entry in &bank().spec(level).entries {
                assert_eq!(
                    entry.template.matches(PLACEHOLDER).count(),
                    1,
                    "template {:?} should contain one placeholder",
                    entry.template
                );
            }
        }
    }

    #[test]
    fn hints_contain_no_placeholder_and_are_never_blank() {
        for level in Level::ALL {
            for entry in &bank().spec(level).entries {
                assert!(!entry.answer_hint.contains(PLACEHOLDER));
                assert!(!entry.answer_hint.trim().is_empty());
            }
        }
    }

    #[test]
    fn level_round_trips_through_name() {
        for level in Level::ALL {
            assert_eq!(Level::from_name(level.name()), Some(level));
        }
    }

    #[test]
    fn level_parse_is_case_sensitive() {
        assert_eq!(Level::from_name("recall"), None);
        assert_eq!(Level::from_name("NotALevel"), None);
    }

    #[test]
    fn label_joins_name_and_description() {
        assert_eq!(Level::Recall.label(), "Recall - Tests basic definitions, safety, and function.");
    }

    #[test]
    fn spec_by_name_matches_spec() {
        let by_name = bank().spec_by_name("Troubleshooting").unwrap();
        assert_eq!(by_name.description, bank().spec(Level::Troubleshooting).description);
    }
}
