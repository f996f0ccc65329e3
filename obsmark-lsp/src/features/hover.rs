//! Word extraction for hover requests.
//!
//! The analysis core matches the word under the cursor exactly; pulling that
//! word out of the buffer is editor-side work, so the server does it here.

use tower_lsp::lsp_types::Position;

/// Extract the identifier-like word spanning `position`.
///
/// A word is a run of ASCII alphanumerics and underscores, which covers every
/// documented key and deliberately stops at `.` so `Inputs.range` hovers as
/// `Inputs` or `range` depending on the cursor side. A cursor sitting
/// immediately after the last character of a word still resolves to it.
/// Positions are interpreted as character offsets; the documented keys are
/// ASCII, so the distinction from UTF-16 columns only shifts cursors in
/// lines with non-ASCII prose, where no key can match anyway.
pub fn word_at_position(text: &str, position: Position) -> Option<&str> {
    let line = text.lines().nth(position.line as usize)?;
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let is_word = |ch: char| ch.is_ascii_alphanumeric() || ch == '_';

    let mut idx = (position.character as usize).min(chars.len());
    if idx == chars.len() || !is_word(chars[idx].1) {
        if idx == 0 || !is_word(chars[idx - 1].1) {
            return None;
        }
        idx -= 1;
    }

    let mut start = idx;
    while start > 0 && is_word(chars[start - 1].1) {
        start -= 1;
    }
    let mut end = idx + 1;
    while end < chars.len() && is_word(chars[end].1) {
        end += 1;
    }

    let begin = chars[start].0;
    let finish = chars.get(end).map_or(line.len(), |(offset, _)| *offset);
    Some(&line[begin..finish])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LINE: &str = "viewof gain = Inputs.range([0, 11])";

    #[rstest]
    #[case(0, Some("viewof"))]
    #[case(3, Some("viewof"))]
    #[case(6, Some("viewof"))] // cursor just past the word
    #[case(7, Some("gain"))]
    #[case(12, None)] // on the `=`
    #[case(14, Some("Inputs"))]
    #[case(20, Some("Inputs"))] // on the dot, resolves to the word before it
    #[case(21, Some("range"))]
    #[case(99, None)] // past the closing paren at end of line
    fn resolves_words_on_a_cell_line(#[case] character: u32, #[case] expected: Option<&str>) {
        assert_eq!(word_at_position(LINE, Position::new(0, character)), expected);
    }

    #[test]
    fn cursor_past_a_trailing_word_still_resolves_it() {
        assert_eq!(
            word_at_position("mutable count", Position::new(0, 99)),
            Some("count")
        );
    }

    #[test]
    fn missing_line_yields_nothing() {
        assert_eq!(word_at_position("only one line", Position::new(3, 0)), None);
    }

    #[test]
    fn blank_line_yields_nothing() {
        assert_eq!(word_at_position("first\n\nthird", Position::new(1, 0)), None);
    }

    #[test]
    fn words_resolve_across_lines() {
        let text = "# Title\n\n```js\nmutable count = 0\n```";
        assert_eq!(word_at_position(text, Position::new(3, 2)), Some("mutable"));
        assert_eq!(word_at_position(text, Position::new(3, 8)), Some("count"));
    }
}
