//! Translation of semantic completion candidates into protocol items.

use obsmark_analysis::completion::CompletionCandidate;
use tower_lsp::lsp_types::{
    CompletionItem, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
};

/// Convert a candidate into a protocol completion item.
///
/// Insert texts always ship as snippets: the catalog's placeholder slots
/// (`${1:...}`) only expand when the editor treats them as such.
pub fn to_completion_item(candidate: CompletionCandidate) -> CompletionItem {
    CompletionItem {
        label: candidate.label,
        kind: Some(candidate.kind),
        detail: candidate.detail,
        documentation: candidate.documentation.map(|value| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            })
        }),
        insert_text: candidate.insert_text,
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..CompletionItem::default()
    }
}
