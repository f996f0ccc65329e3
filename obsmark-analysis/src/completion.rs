//! Completion responder over the static catalog.

use crate::catalog::{SuggestionEntry, SUGGESTIONS};
use crate::detect::detect;
use lsp_types::{CompletionItemKind, Position};

/// Describes a completion candidate that can be translated into protocol
/// specific items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub detail: Option<String>,
    pub kind: CompletionItemKind,
    pub insert_text: Option<String>,
    pub documentation: Option<String>,
}

impl CompletionCandidate {
    fn from_entry(entry: &SuggestionEntry) -> Self {
        Self {
            label: entry.label.to_string(),
            detail: Some(entry.detail.to_string()),
            kind: entry.kind,
            insert_text: Some(entry.insert_text.to_string()),
            documentation: Some(entry.documentation.to_string()),
        }
    }
}

/// Produce completion candidates for the document at the provided position.
///
/// Documents that do not classify as Observable Markdown get no candidates.
/// Classified documents get the full catalog in declaration order: the
/// position is accepted for protocol parity but does not influence the
/// result, and narrowing by typed prefix is left to the editor.
pub fn completion_items(text: &str, _position: Position) -> Vec<CompletionCandidate> {
    if !detect(text) {
        return Vec::new();
    }
    SUGGESTIONS.iter().map(CompletionCandidate::from_entry).collect()
}
