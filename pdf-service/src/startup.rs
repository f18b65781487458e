use crate::config::PdfServiceConfig;
use crate::handlers;
use crate::services::{
    CommandExecutor, LopdfExtractor, PdfRenderer, PdfTextExtractor, WkhtmltopdfRenderer,
};
use crate::ApiDoc;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{decompression::RequestDecompressionLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub config: PdfServiceConfig,
    pub renderer: Arc<dyn PdfRenderer>,
    pub extractor: Arc<dyn PdfTextExtractor>,
}

impl AppState {
    /// State backed by the wkhtmltopdf binary and the lopdf extractor.
    pub fn new(config: PdfServiceConfig) -> Self {
        let executor = CommandExecutor::new(config.renderer.timeout);
        let renderer = WkhtmltopdfRenderer::new(config.renderer.wkhtmltopdf_path.clone(), executor);

        Self {
            config,
            renderer: Arc::new(renderer),
            extractor: Arc::new(LopdfExtractor::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_request_bytes = state.config.max_request_bytes;

    Router::new()
        .route("/", get(handlers::docs_redirect))
        .route("/api-docs", get(handlers::docs_redirect))
        .route("/diagnose", get(handlers::diagnose))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route("/api/Version", get(handlers::version))
        .route(
            "/api/Pdf/ConvertHtmlToPdf",
            post(handlers::convert_html_to_pdf),
        )
        .route("/extract-pdf-lines/", post(handlers::extract_pdf_lines))
        .merge(SwaggerUi::new(handlers::docs::DOCS_PATH).url("/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_request_bytes))
        .layer(RequestDecompressionLayer::new())
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

pub struct Application {
    port: u16,
    server: ServerFuture,
}

impl Application {
    pub async fn build(config: PdfServiceConfig) -> Result<Self, AppError> {
        Self::build_with_state(AppState::new(config)).await
    }

    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port = port,
            wkhtmltopdf = %state.config.renderer.wkhtmltopdf_path,
            render_timeout_secs = state.config.renderer.timeout.as_secs(),
            "Listening"
        );

        let app = build_router(state);
        let server = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        Ok(Self {
            port,
            server: Box::pin(server),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
