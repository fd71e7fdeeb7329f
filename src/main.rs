use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use warikan::api::handlers::{AppService, api_routes};
use warikan::api::openapi::ApiDoc;
use warikan::config::CONFIG;
use warikan::infrastructure::storage::Storage;
use warikan::{InMemoryLogging, InMemoryStorage, JsonFileStorage, ReportStyle, SettleOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Starting with {:?}", *CONFIG);

    let storage: Box<dyn Storage> = match &CONFIG.snapshot_path {
        Some(path) => {
            info!("Persisting ledger to {}", path.display());
            Box::new(JsonFileStorage::open(path).await?)
        }
        None => Box::new(InMemoryStorage::new()),
    };
    let service: Arc<AppService> = Arc::new(build_service(storage));

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_service(storage: Box<dyn Storage>) -> AppService {
    AppService::new(storage, InMemoryLogging::new()).with_settings(
        SettleOptions {
            threshold: CONFIG.transfer_threshold,
        },
        ReportStyle {
            currency: CONFIG.currency_suffix.clone(),
        },
    )
}
