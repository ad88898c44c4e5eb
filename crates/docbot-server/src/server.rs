//! Server startup.

use crate::error::{ServerError, ServerResult};
use crate::routes::router;
use crate::service::{ChainChatbotService, ChatbotService};
use crate::state::AppState;
use axum::Router;
use docbot_chain::{ChainBuilder, ConversationalRetrievalChain, OllamaChatModel, OllamaEmbedder};
use docbot_config::Config;
use docbot_ingest::DocumentLoader;
use docbot_ollama::OllamaClient;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Load the configured documents and build a chain over them.
///
/// Any source that fails to load aborts startup.
pub async fn build_chain(config: &Config) -> ServerResult<ConversationalRetrievalChain> {
    let client = OllamaClient::from_config(&config.ollama)?;
    if client.is_available().await {
        for model in [&config.ollama.model, &config.ollama.embedding_model] {
            if !client.has_model(model).await? {
                warn!("Model {} is not pulled on {}", model, client.host());
            }
        }
    } else {
        warn!("Ollama does not respond at {}", client.host());
    }

    let loader = DocumentLoader::new(Duration::from_secs(config.ollama.timeout_seconds))?;
    let documents = loader.load_all(&config.documents.sources).await?;
    if documents.is_empty() {
        warn!("No documents configured, answers will not be grounded");
    }

    let embedder = OllamaEmbedder::from_config(client.clone(), &config.ollama);
    let chat_model = OllamaChatModel::new(
        client,
        &config.ollama.model,
        config.retrieval.temperature,
    );

    let mut chain = ChainBuilder::from_config(config)
        .embedder(Arc::new(embedder))
        .chat_model(Arc::new(chat_model))
        .build()?;
    chain.ingest(&documents).await?;

    Ok(chain)
}

/// The chatbot HTTP server.
pub struct DocbotServer {
    config: Config,
    state: AppState,
}

impl DocbotServer {
    /// Create a server answering through `service`.
    pub fn new(config: Config, service: Arc<dyn ChatbotService>) -> Self {
        Self {
            config,
            state: AppState::new(service),
        }
    }

    /// Load documents, build the chain and wrap it in a server.
    pub async fn from_config(config: Config) -> ServerResult<Self> {
        let chain = build_chain(&config).await?;
        let service = ChainChatbotService::new(Arc::new(chain));
        Ok(Self::new(config, Arc::new(service)))
    }

    /// Build the router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        router(self.state.clone(), self.config.server.max_body_bytes)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Serve until `shutdown` resolves.
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.address();
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(address.as_str())
            .await
            .map_err(|cause| ServerError::Bind {
                address: address.clone(),
                cause,
            })?;

        info!("Listening on http://{}", address);
        info!("DOC Chatbot is running!");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }

    /// Serve until Ctrl-C.
    pub async fn start(self) -> ServerResult<()> {
        self.start_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Shutting down");
        })
        .await
    }

    pub fn address(&self) -> String {
        self.config.server.address()
    }
}
