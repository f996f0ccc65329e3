//! Language Server Protocol (LSP) implementation for Observable Markdown
//!
//!     This crate exposes the authoring-assistance core over LSP so any
//!     compatible editor (VSCode, Neovim, Emacs, Sublime, etc.) can offer
//!     Observable Markdown completions and hovers in Markdown buffers.
//!
//! Design Decision: tower-lsp
//!
//!     tower-lsp handles the JSON-RPC plumbing, capability negotiation and
//!     request routing, leaving this crate with a thin server layer over the
//!     analysis functions. The assistance core is one-shot and synchronous,
//!     so the async handlers complete immediately; no request ever blocks or
//!     needs cancellation support of its own.
//!
//! Feature Set
//!
//!     Observable Markdown is a document dialect, not a programming
//!     language, and the assistance is table-driven rather than
//!     parse-driven. The surfaces are therefore small:
//!
//!         1. Completion (textDocument/completion):
//!             - The full suggestion catalog in classified documents,
//!               triggered manually or on `.`
//!             - Snippet insert texts with tab-stop placeholders
//!
//!         2. Hover (textDocument/hover):
//!             - Long-form documentation for the dialect's keywords and
//!               namespaces, exact word match only
//!
//!         3. New document (workspace/executeCommand):
//!             - `obsmark.newDocument` returns the starter page; opening a
//!               buffer with it is the client's job
//!
//! Architecture
//!
//!     Server Layer (this crate):
//!         - Implements the LanguageServer trait
//!         - Tracks open document text (full sync, no parsing)
//!         - Routes requests through a FeatureProvider seam
//!
//!     Feature Layer (obsmark-analysis):
//!         - Heuristic dialect detection over raw text
//!         - Static suggestion catalog and hover documentation
//!
//!     The FeatureProvider indirection exists so the regex heuristic can be
//!     swapped for a real grammar-based classifier later without touching
//!     the protocol layer.
//!
//! Usage
//!
//!     Binary:
//!         $ obsmark-lsp
//!         Starts the language server on stdin/stdout for editor
//!         integration. Logs go to stderr, filtered by RUST_LOG.

pub mod features;
pub mod server;

pub use server::{LspSettings, ObsmarkLanguageServer};
