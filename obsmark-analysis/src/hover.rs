//! Hover responder over the static documentation table.

use crate::catalog::HOVER_DOCS;
use crate::detect::detect;
use lsp_types::Position;

/// Look up long-form documentation for the word under the cursor.
///
/// The word is matched exactly against the documented keys; extracting it
/// from the buffer is the host's job. Returns `None` when the document does
/// not classify as Observable Markdown, even for a documented word, and the
/// position is accepted for protocol parity only.
pub fn hover_documentation(text: &str, _position: Position, word: &str) -> Option<&'static str> {
    if !detect(text) {
        return None;
    }
    HOVER_DOCS
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, doc)| *doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const OBSERVABLE_DOC: &str = "```js\nviewof x = Inputs.range([0, 10])\n```";
    const PLAIN_DOC: &str = "# Hello\n\nJust text.";

    #[rstest]
    #[case("viewof")]
    #[case("mutable")]
    #[case("FileAttachment")]
    #[case("Inputs")]
    #[case("Plot")]
    fn documented_words_resolve(#[case] word: &str) {
        let doc = hover_documentation(OBSERVABLE_DOC, Position::new(0, 0), word)
            .unwrap_or_else(|| panic!("{} should be documented", word));
        assert!(doc.contains(word));
    }

    #[test]
    fn plot_documentation_describes_the_grammar_of_graphics() {
        let doc = hover_documentation(OBSERVABLE_DOC, Position::new(0, 0), "Plot").unwrap();
        assert!(doc.contains("grammar of graphics"));
    }

    #[rstest]
    #[case::unknown_symbol("unknownSymbol")]
    #[case::per_function_granularity("Inputs.range")]
    #[case::case_sensitive("VIEWOF")]
    #[case::empty_word("")]
    fn unmatched_words_resolve_to_nothing(#[case] word: &str) {
        assert!(hover_documentation(OBSERVABLE_DOC, Position::new(0, 0), word).is_none());
    }

    #[test]
    fn plain_markdown_never_hovers() {
        assert!(hover_documentation(PLAIN_DOC, Position::new(0, 0), "Plot").is_none());
    }
}
