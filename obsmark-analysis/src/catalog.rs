//! Static suggestion and documentation tables.
//!
//! The catalog is fixed data constructed at compile time: editors receive
//! the same entries for every Observable Markdown document, in declaration
//! order, and narrow them by typed prefix on their side. Insert texts use
//! LSP snippet placeholders (`${1:...}`), which editors expand into tab
//! stops.

use lsp_types::CompletionItemKind;
use serde::Serialize;

/// One completable symbol: unique label, protocol kind, snippet body, a
/// one-line detail, and long-form Markdown documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    pub label: &'static str,
    pub kind: CompletionItemKind,
    pub insert_text: &'static str,
    pub detail: &'static str,
    pub documentation: &'static str,
}

/// Every completion the dialect offers, keyword and function entries first,
/// data-loader snippets last. Labels are unique; hover lookups rely on it.
pub const SUGGESTIONS: &[SuggestionEntry] = &[
    SuggestionEntry {
        label: "viewof",
        kind: CompletionItemKind::KEYWORD,
        insert_text: "viewof ${1:variableName} = ${2:input}",
        detail: "Observable viewof declaration",
        documentation: "Creates a reactive view that exposes both the input element and its value",
    },
    SuggestionEntry {
        label: "mutable",
        kind: CompletionItemKind::KEYWORD,
        insert_text: "mutable ${1:variableName} = ${2:initialValue}",
        detail: "Observable mutable declaration",
        documentation: "Creates a mutable variable that can be modified from other cells",
    },
    SuggestionEntry {
        label: "FileAttachment",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "FileAttachment(\"${1:filename}\")",
        detail: "Observable FileAttachment function",
        documentation: "Loads a file from the static files directory",
    },
    SuggestionEntry {
        label: "import",
        kind: CompletionItemKind::KEYWORD,
        insert_text: "import {${1:symbols}} from \"${2:notebook-url}\"",
        detail: "Observable import statement",
        documentation: "Imports symbols from another Observable notebook",
    },
    SuggestionEntry {
        label: "Inputs.button",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "Inputs.button(\"${1:label}\", {${2:options}})",
        detail: "Observable Inputs button",
        documentation: "Creates an interactive button input",
    },
    SuggestionEntry {
        label: "Inputs.text",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "Inputs.text({${1:options}})",
        detail: "Observable Inputs text",
        documentation: "Creates a text input field",
    },
    SuggestionEntry {
        label: "Inputs.range",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "Inputs.range([${1:min}, ${2:max}], {${3:options}})",
        detail: "Observable Inputs range",
        documentation: "Creates a range slider input",
    },
    SuggestionEntry {
        label: "Inputs.select",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "Inputs.select(${1:options}, {${2:config}})",
        detail: "Observable Inputs select",
        documentation: "Creates a select dropdown input",
    },
    SuggestionEntry {
        label: "Plot.plot",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "Plot.plot({\n  ${1:marks}: [${2:mark}],\n  ${3:options}\n})",
        detail: "Observable Plot",
        documentation: "Creates a Plot visualization",
    },
    SuggestionEntry {
        label: "d3.select",
        kind: CompletionItemKind::FUNCTION,
        insert_text: "d3.select(\"${1:selector}\")",
        detail: "D3 select",
        documentation: "Selects the first element matching the selector",
    },
    SuggestionEntry {
        label: "data-loader-js",
        kind: CompletionItemKind::SNIPPET,
        insert_text: "```js ${1:filename}.js\n${2:// JavaScript data loader code}\n```",
        detail: "JavaScript data loader",
        documentation: "Creates a JavaScript data loader block",
    },
    SuggestionEntry {
        label: "data-loader-py",
        kind: CompletionItemKind::SNIPPET,
        insert_text: "```py ${1:filename}.py\n${2:# Python data loader code}\n```",
        detail: "Python data loader",
        documentation: "Creates a Python data loader block",
    },
    SuggestionEntry {
        label: "data-loader-sql",
        kind: CompletionItemKind::SNIPPET,
        insert_text: "```sql ${1:filename}.sql\n${2:-- SQL data loader code}\n```",
        detail: "SQL data loader",
        documentation: "Creates a SQL data loader block",
    },
    SuggestionEntry {
        label: "data-loader-r",
        kind: CompletionItemKind::SNIPPET,
        insert_text: "```r ${1:filename}.r\n${2:# R data loader code}\n```",
        detail: "R data loader",
        documentation: "Creates an R data loader block",
    },
];

/// Long-form hover documentation, keyed by the exact word under the cursor.
///
/// Coarser than the completion catalog: `Inputs` and `Plot` are documented
/// as namespaces rather than per function.
pub const HOVER_DOCS: &[(&str, &str)] = &[
    (
        "viewof",
        "**Observable viewof**\n\nCreates a reactive view that exposes both the input element and its value.\n\n```javascript\nviewof name = Inputs.text({placeholder: \"Enter your name\"})\n```",
    ),
    (
        "mutable",
        "**Observable mutable**\n\nCreates a mutable variable that can be modified from other cells.\n\n```javascript\nmutable count = 0\n```",
    ),
    (
        "FileAttachment",
        "**Observable FileAttachment**\n\nLoads a file from the static files directory.\n\n```javascript\nconst data = FileAttachment(\"data.json\").json()\n```",
    ),
    (
        "Inputs",
        "**Observable Inputs**\n\nProvides interactive input components like buttons, text fields, sliders, etc.\n\n```javascript\nInputs.button(\"Click me\")\nInputs.text({placeholder: \"Type here\"})\nInputs.range([0, 100])\n```",
    ),
    (
        "Plot",
        "**Observable Plot**\n\nA grammar of graphics library for creating data visualizations.\n\n```javascript\nPlot.plot({\n  marks: [\n    Plot.line(data, {x: \"date\", y: \"value\"})\n  ]\n})\n```",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_has_fourteen_unique_labels() {
        let labels: BTreeSet<_> = SUGGESTIONS.iter().map(|entry| entry.label).collect();
        assert_eq!(SUGGESTIONS.len(), 14);
        assert_eq!(labels.len(), SUGGESTIONS.len());
    }

    #[test]
    fn keyword_and_function_entries_precede_data_loaders() {
        let first_snippet = SUGGESTIONS
            .iter()
            .position(|entry| entry.kind == CompletionItemKind::SNIPPET)
            .expect("catalog contains data-loader snippets");
        assert_eq!(first_snippet, 10);
        assert!(SUGGESTIONS[first_snippet..]
            .iter()
            .all(|entry| entry.kind == CompletionItemKind::SNIPPET));
        assert!(SUGGESTIONS[..first_snippet]
            .iter()
            .all(|entry| entry.kind != CompletionItemKind::SNIPPET));
    }

    #[test]
    fn every_snippet_slot_is_ordered_from_one() {
        for entry in SUGGESTIONS {
            assert!(
                entry.insert_text.contains("${1:"),
                "{} is missing its first placeholder",
                entry.label
            );
        }
    }

    #[test]
    fn hover_keys_are_a_subset_of_completion_roots() {
        for (key, doc) in HOVER_DOCS {
            assert!(
                SUGGESTIONS
                    .iter()
                    .any(|entry| entry.label == *key || entry.label.starts_with(&format!("{}.", key))),
                "hover key {} has no catalog counterpart",
                key
            );
            assert!(doc.starts_with("**Observable"), "{} doc lacks its heading", key);
        }
    }
}
