//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::features::commands::{execute_command, COMMAND_NEW_DOCUMENT};
use crate::features::completion::to_completion_item;
use crate::features::hover::word_at_position;
use obsmark_analysis::completion::{completion_items, CompletionCandidate};
use obsmark_analysis::hover::hover_documentation;
use obsmark_analysis::template::new_document_template;
use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionParams, CompletionResponse, ExecuteCommandOptions,
    ExecuteCommandParams, Hover, HoverContents, HoverParams, HoverProviderCapability,
    InitializeParams, InitializeResult, InitializedParams, MarkupContent, MarkupKind, Position,
    ServerCapabilities, ServerInfo, TextDocumentItem, TextDocumentSyncCapability,
    TextDocumentSyncKind, Url, WorkDoneProgressOptions,
};
use tower_lsp::Client;

pub trait LspClient: Send + Sync + Clone + 'static {}
impl LspClient for Client {}

pub trait FeatureProvider: Send + Sync + 'static {
    fn completions(&self, text: &str, position: Position) -> Vec<CompletionCandidate>;
    fn hover(&self, text: &str, position: Position) -> Option<String>;
    fn new_document(&self) -> &'static str;
}

#[derive(Default)]
pub struct DefaultFeatureProvider;

impl DefaultFeatureProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn completions(&self, text: &str, position: Position) -> Vec<CompletionCandidate> {
        completion_items(text, position)
    }

    fn hover(&self, text: &str, position: Position) -> Option<String> {
        let word = word_at_position(text, position)?;
        hover_documentation(text, position, word).map(str::to_string)
    }

    fn new_document(&self) -> &'static str {
        new_document_template()
    }
}

/// Runtime toggles for the protocol surfaces, sourced from obsmark-config.
#[derive(Debug, Clone, Copy)]
pub struct LspSettings {
    pub completions: bool,
    pub hover: bool,
}

impl Default for LspSettings {
    fn default() -> Self {
        Self {
            completions: true,
            hover: true,
        }
    }
}

#[derive(Default)]
struct DocumentStore {
    entries: RwLock<HashMap<Url, Arc<String>>>,
}

impl DocumentStore {
    async fn upsert(&self, uri: Url, text: String) {
        self.entries.write().await.insert(uri, Arc::new(text));
    }

    async fn get(&self, uri: &Url) -> Option<Arc<String>> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn remove(&self, uri: &Url) {
        self.entries.write().await.remove(uri);
    }
}

pub struct ObsmarkLanguageServer<C = Client, P = DefaultFeatureProvider> {
    _client: C,
    documents: DocumentStore,
    features: Arc<P>,
    settings: LspSettings,
}

impl ObsmarkLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client) -> Self {
        Self::with_features(client, Arc::new(DefaultFeatureProvider::new()))
    }
}

impl<C, P> ObsmarkLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, features: Arc<P>) -> Self {
        Self {
            _client: client,
            documents: DocumentStore::default(),
            features,
            settings: LspSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: LspSettings) -> Self {
        self.settings = settings;
        self
    }

    async fn store(&self, uri: Url, text: String) {
        self.documents.upsert(uri, text).await;
    }

    async fn document(&self, uri: &Url) -> Option<Arc<String>> {
        self.documents.get(uri).await
    }
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for ObsmarkLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(vec![".".to_string()]),
                ..CompletionOptions::default()
            }),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![COMMAND_NEW_DOCUMENT.to_string()],
                work_done_progress_options: WorkDoneProgressOptions::default(),
            }),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "obsmark-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("obsmark language server initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: lsp_types::DidOpenTextDocumentParams) {
        let TextDocumentItem { uri, text, .. } = params.text_document;
        self.store(uri, text).await;
    }

    async fn did_change(&self, params: lsp_types::DidChangeTextDocumentParams) {
        // Full sync: the last change carries the complete buffer.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.store(params.text_document.uri, change.text).await;
        }
    }

    async fn did_close(&self, params: lsp_types::DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        if !self.settings.completions {
            return Ok(None);
        }
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        if let Some(text) = self.document(&uri).await {
            let candidates = self.features.completions(&text, position);
            tracing::debug!(candidates = candidates.len(), "completion request served");
            let items = candidates.into_iter().map(to_completion_item).collect();
            Ok(Some(CompletionResponse::Array(items)))
        } else {
            Ok(None)
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        if !self.settings.hover {
            return Ok(None);
        }
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        if let Some(text) = self.document(&uri).await {
            if let Some(contents) = self.features.hover(&text, position) {
                return Ok(Some(Hover {
                    contents: HoverContents::Markup(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: contents,
                    }),
                    range: None,
                }));
            }
        }
        Ok(None)
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        execute_command(
            &params.command,
            &params.arguments,
            self.features.new_document(),
        )
    }
}
