use dashmap::DashMap;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use carla_lsp_core::{ApiCatalog, CatalogError};

use crate::capabilities;
use crate::document::Document;
use crate::handlers;

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    /// None after a failed load; every feature then serves empty results
    catalog: Option<ApiCatalog>,
    load_error: Option<String>,
    debug: bool,
}

impl Backend {
    pub fn new(
        client: Client,
        catalog: std::result::Result<ApiCatalog, CatalogError>,
        debug: bool,
    ) -> Self {
        let (catalog, load_error) = match catalog {
            Ok(catalog) => (Some(catalog), None),
            Err(error) => (None, Some(error.to_string())),
        };

        Self {
            client,
            documents: DashMap::new(),
            catalog,
            load_error,
            debug,
        }
    }

    async fn log_debug(&self, message: &str) {
        if self.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        self.log_debug("Initializing CARLA LSP server").await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "carla-lsp".to_string(),
                version: Some("0.1.0".to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        if let Some(catalog) = &self.catalog {
            self.client
                .log_message(
                    MessageType::INFO,
                    format!("CARLA API ready ({} classes)", catalog.class_count()),
                )
                .await;
        } else if let Some(error) = &self.load_error {
            // Surfaced once; features stay silent from here on
            self.client
                .show_message(
                    MessageType::ERROR,
                    format!("Failed to load CARLA API definition: {}", error),
                )
                .await;
        }
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;

        self.log_debug(&format!("Document opened: {}", uri)).await;

        self.documents.insert(uri, Document::new(text));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        self.log_debug(&format!("Document changed: {}", uri)).await;

        if let Some(mut doc) = self.documents.get_mut(&uri) {
            // Full sync: each change carries the entire document text
            for change in params.content_changes {
                doc.update_text(change.text);
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        if let Some(doc) = self.documents.get(uri) {
            let items =
                handlers::completion::get_completions(self.catalog.as_ref(), &doc, position);
            Ok(Some(CompletionResponse::Array(items)))
        } else {
            Ok(None)
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Hover request at {:?}", position))
            .await;

        if let Some(doc) = self.documents.get(uri) {
            Ok(handlers::hover::get_hover(
                self.catalog.as_ref(),
                &doc,
                position,
            ))
        } else {
            Ok(None)
        }
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Signature help request at {:?}", position))
            .await;

        if let Some(doc) = self.documents.get(uri) {
            Ok(handlers::signature_help::get_signature_help(
                self.catalog.as_ref(),
                &doc,
                position,
            ))
        } else {
            Ok(None)
        }
    }
}
