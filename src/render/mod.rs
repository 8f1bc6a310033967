//! Display model and copy serialization
//!
//! The generated record sequence is the single source of truth: both the
//! on-screen view and the clipboard text are derived from it here, never
//! re-scraped from rendered output.

use crate::generate::GeneratedQa;

/// Header line prepended to the clipboard serialization
pub const COPY_HEADER: &str = "Generated Q&A Set:\n\n";

/// One record prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQa {
    /// 1-based position in the set
    pub ordinal: usize,
    /// Question text
    pub question: String,
    /// Answer-hint text
    pub answer_hint: String,
}

/// Build the display model: each record with its 1-based ordinal, in order
pub fn render(records: &[GeneratedQa]) -> Vec<RenderedQa> {
    records
        .iter()
        .enumerate()
        .map(|(i, qa)| RenderedQa {
            ordinal: i + 1,
            question: qa.question.clone(),
            answer_hint: qa.answer_hint.clone(),
        })
        .collect()
}

/// Serialize a record set to the plain-text clipboard format.
///
/// Format: the fixed header, then `"N. Q: <question>\n   A: <hint>\n---\n"`
/// per record in order.
pub fn clipboard_text(records: &[GeneratedQa]) -> String {
    let mut text = String::from(COPY_HEADER);
    for (i, qa) in records.iter().enumerate() {
        text.push_str(&format!(
            "{}. Q: {}\n   A: {}\n---\n",
            i + 1,
            qa.question,
            qa.answer_hint
        ));
    }
    text
}
