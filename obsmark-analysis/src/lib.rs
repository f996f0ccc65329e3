//! Core analysis for Observable Markdown authoring assistance.
//!
//! Observable Markdown embeds reactive notebook cells in ordinary Markdown:
//! fenced `js` blocks with `viewof`/`mutable` declarations, data-loader
//! blocks tagged with a target filename, and `${...}` interpolation in prose.
//! This crate decides whether a document uses that dialect and, when it does,
//! supplies the static suggestion and documentation tables that editor
//! frontends surface as completions and hovers.
//!
//! Everything here is a pure function of the document text plus constant
//! data. There is no parser and no AST: classification is a disjunction of
//! regex heuristics over the raw buffer, deliberately permissive because a
//! false positive only means irrelevant suggestions in a plain Markdown
//! file. Every entry point is total over arbitrary strings and never errors.

pub mod catalog;
pub mod completion;
pub mod detect;
pub mod hover;
pub mod template;

pub use catalog::{SuggestionEntry, HOVER_DOCS, SUGGESTIONS};
pub use completion::{completion_items, CompletionCandidate};
pub use detect::detect;
pub use hover::hover_documentation;
pub use template::{new_document_template, NEW_DOCUMENT_TEMPLATE};
