//! Starter document for the new-file command.

/// Fixed starter page: a title block, a reactive cell defining a message, a
/// styled container interpolating it, and an example interactive input.
/// Unconditional constant data; emitting it is never gated by detection.
pub const NEW_DOCUMENT_TEMPLATE: &str = r#"---
title: New Observable Framework Page
---

# My Observable Framework Page

Welcome to your new Observable Framework page!

```js
// This is a reactive JavaScript cell
const message = "Hello, Observable Framework!"
```

<div class="card">
  ${message}
</div>

```js
// Create an interactive input
viewof name = Inputs.text({placeholder: "Enter your name"})
```

```js
// Use the input value reactively
md`Hello, **${name || "world"}**! Welcome to Observable Framework.`
```
"#;

/// The starter document payload. Byte-identical on every call.
pub fn new_document_template() -> &'static str {
    NEW_DOCUMENT_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::detect;

    #[test]
    fn template_is_byte_identical_across_calls() {
        assert_eq!(new_document_template(), new_document_template());
        assert_eq!(new_document_template(), NEW_DOCUMENT_TEMPLATE);
    }

    #[test]
    fn template_carries_the_expected_sections() {
        assert!(NEW_DOCUMENT_TEMPLATE.starts_with("---\ntitle: New Observable Framework Page\n---\n"));
        assert!(NEW_DOCUMENT_TEMPLATE.contains("const message = \"Hello, Observable Framework!\""));
        assert!(NEW_DOCUMENT_TEMPLATE.contains("<div class=\"card\">\n  ${message}\n</div>"));
        assert!(NEW_DOCUMENT_TEMPLATE.contains("viewof name = Inputs.text({placeholder: \"Enter your name\"})"));
    }

    #[test]
    fn template_classifies_as_observable_markdown() {
        // A freshly created page should immediately receive assistance.
        assert!(detect(NEW_DOCUMENT_TEMPLATE));
    }
}
