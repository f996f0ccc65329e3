//! Heuristic classification of Markdown documents as Observable Markdown.
//!
//! The detector evaluates a fixed table of regex rules against the whole
//! document text and reports a match if any single rule fires. The rules are
//! indicators, not a grammar: a document qualifies when it shows one of the
//! dialect's signatures (a reactive keyword inside a `js` fence, a
//! data-loader fence, template interpolation). Matching is case-sensitive
//! and never requires a fence to be closed, so an unterminated trailing
//! block at end of file still classifies.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dialect indicator patterns as named regex rules.
///
/// Fence-content rules run with `(?s)` so a block body may span lines; the
/// data-loader rule anchors its `$` per line with `(?m)`. Detection is a
/// pure disjunction, so the declaration order affects only which rule
/// short-circuits first, never the result.
const DIALECT_PATTERNS: &[(&str, &str)] = &[
    ("viewof_declaration", r"(?s)```js\s*\n.*?viewof\s"),
    ("mutable_declaration", r"(?s)```js\s*\n.*?mutable\s"),
    ("file_attachment_call", r"(?s)```js\s*\n.*?FileAttachment\s*\("),
    ("braced_import", r"(?s)```js\s*\n.*?import\s*\{.*?\}\s*from"),
    ("inputs_namespace", r"(?s)```js\s*\n.*?Inputs\."),
    ("plot_namespace", r"(?s)```js\s*\n.*?Plot\."),
    ("data_loader_block", r"(?m)```\w+\s+\w+\.(?:js|py|sql|r)\s*$"),
    ("template_interpolation", r"(?s)\$\{.*?\}"),
    ("display_call", r"(?s)```js\s*\n.*?display\s*\("),
    ("html_template_literal", r"(?s)```js\s*\n.*?html`"),
    ("md_template_literal", r"(?s)```js\s*\n.*?md`"),
];

static COMPILED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DIALECT_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            Regex::new(pattern)
                .unwrap_or_else(|err| panic!("dialect pattern {} failed to compile: {}", name, err))
        })
        .collect()
});

/// Classify a document's full text as Observable Markdown or not.
///
/// Total over all strings; empty input classifies false. The heuristic is
/// deliberately permissive — the bare `${...}` interpolation rule in
/// particular fires on any templated Markdown — because a wrong positive
/// only surfaces unwanted suggestions, while a wrong negative would withhold
/// assistance from a real notebook.
pub fn detect(text: &str) -> bool {
    COMPILED_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(text))
}
