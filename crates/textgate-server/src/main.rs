//! textgate server - REST gateway for a Weaviate vector database.

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use textgate_client::{WeaviateClient, WeaviateConfig};
use textgate_server::{router, ApiDoc, AppState};

/// textgate - REST gateway for text collections in a Weaviate vector database
#[derive(Parser, Debug)]
#[command(name = "textgate-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "TEXTGATE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Base URL of the Weaviate instance
    #[arg(long, default_value = "http://localhost:8080", env = "WEAVIATE_URL")]
    weaviate_url: String,

    /// API key forwarded to the OpenAI vectorizer/generative modules
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting textgate server...");
    tracing::info!("Weaviate instance: {}", args.weaviate_url);

    let mut config = WeaviateConfig::new(&args.weaviate_url);
    if let Some(key) = &args.openai_api_key {
        config = config.with_api_key(key);
    }

    // Connect once at startup. On failure the handle stays unset and every
    // database endpoint answers 503 until the process is restarted against
    // a reachable instance; no retry is scheduled at this layer.
    let state = match WeaviateClient::connect(config).await {
        Ok(client) => Arc::new(AppState::ready(client)),
        Err(e) => {
            tracing::error!("failed to connect to Weaviate: {e}");
            Arc::new(AppState::unready())
        }
    };

    // Build API router with state
    let api_router = router(state);

    // Swagger UI (stateless router), reachable from the root path
    let swagger_ui = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    let app = api_router
        .merge(Router::<()>::new().merge(swagger_ui))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("textgate server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
