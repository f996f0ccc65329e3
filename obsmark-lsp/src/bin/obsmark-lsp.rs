use obsmark_lsp::{LspSettings, ObsmarkLanguageServer};
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout carries the protocol; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = match obsmark_config::load_defaults() {
        Ok(config) => LspSettings {
            completions: config.lsp.completions,
            hover: config.lsp.hover,
        },
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            LspSettings::default()
        }
    };

    let stdin = stdin();
    let stdout = stdout();
    let (service, socket) =
        LspService::new(move |client| ObsmarkLanguageServer::new(client).with_settings(settings));
    Server::new(stdin, stdout, socket).serve(service).await;
}
