/// Keyword Intent Analysis Service
///
/// Accepts keyword lists (typed JSON or CSV upload), classifies each
/// keyword into one of four search-intent buckets, and returns per-intent
/// tables plus summary statistics for the browser UI.
/// Port: 9000

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use keyword_analyzer::classifier::{ClassificationOutcome, KeywordClassifier};
use keyword_analyzer::cluster_generator::{KeywordCluster, KeywordClusterer};
use keyword_analyzer::config::ServiceConfig;
use keyword_analyzer::csv_loader::parse_keyword_csv;
use keyword_analyzer::error::ValidationError;
use keyword_analyzer::intent_detector::IntentLabel;
use keyword_analyzer::normalizer::normalize_input;
use keyword_analyzer::pipeline_config::PipelineConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &[".csv", ".txt"];

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
struct AppState {
    classifier: Arc<KeywordClassifier>,
    clusterer: Arc<KeywordClusterer>,
}

impl AppState {
    fn new(pipeline: PipelineConfig) -> Self {
        let clusterer = KeywordClusterer::with_cluster_size(pipeline.cluster_size);
        Self {
            classifier: Arc::new(KeywordClassifier::with_config(pipeline)),
            clusterer: Arc::new(clusterer),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProcessKeywordsRequest {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    volumes: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct ProcessResponse {
    success: bool,
    #[serde(flatten)]
    outcome: ClassificationOutcome,
}

#[derive(Debug, Serialize)]
struct ClusterResponse {
    success: bool,
    clusters: Vec<KeywordCluster>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    intent_labels: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    pipeline: PipelineConfig,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
}

fn validation_error(err: ValidationError) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

// ============================================================================
// HTTP Handlers
// ============================================================================

/// Health check
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        intent_labels: IntentLabel::ALL.iter().map(|label| label.as_str()).collect(),
    })
}

/// Pipeline configuration echo
async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatsResponse {
        pipeline: state.classifier.config().clone(),
    })
}

/// Classify a typed keyword list with optional parallel volumes
async fn process_keywords(
    State(state): State<AppState>,
    Json(request): Json<ProcessKeywordsRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let records = normalize_input(&request.keywords, &request.volumes).map_err(validation_error)?;

    info!("Processing {} keyword(s)", records.len());
    let outcome = state.classifier.classify(&records).map_err(validation_error)?;

    Ok(Json(ProcessResponse {
        success: true,
        outcome,
    }))
}

/// Classify an uploaded CSV/TXT keyword list
async fn process_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, ApiError> {
    let mut upload: Option<(String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))?
    {
        let file_name = field.file_name().unwrap_or_default().to_string();
        let text = field
            .text()
            .await
            .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))?;
        upload = Some((file_name, text));
        break;
    }

    let Some((file_name, text)) = upload else {
        return Err(error_response(StatusCode::BAD_REQUEST, "No file uploaded"));
    };

    if !has_allowed_extension(&file_name) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Only CSV or TXT files allowed",
        ));
    }

    let records = parse_keyword_csv(&text);
    debug!("Parsed {} row(s) from upload \"{}\"", records.len(), file_name);

    info!("Processing CSV with {} keyword(s)", records.len());
    let outcome = state.classifier.classify(&records).map_err(validation_error)?;

    Ok(Json(ProcessResponse {
        success: true,
        outcome,
    }))
}

/// Group keywords into placeholder clusters for the UI
async fn cluster_keywords(
    State(state): State<AppState>,
    Json(request): Json<ProcessKeywordsRequest>,
) -> Result<Json<ClusterResponse>, ApiError> {
    let records = normalize_input(&request.keywords, &request.volumes).map_err(validation_error)?;

    let clusters = state.clusterer.cluster(&records);
    info!("Built {} cluster(s) from {} keyword(s)", clusters.len(), records.len());

    Ok(Json(ClusterResponse {
        success: true,
        clusters,
    }))
}

async fn fallback() -> ApiError {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

fn has_allowed_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ALLOWED_UPLOAD_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

// ============================================================================
// Main Application
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (fails silently if not found)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt().with_target(false).init();

    info!("Starting Keyword Intent Analysis Service");

    let config = ServiceConfig::from_env();
    config.log_config();

    let state = AppState::new(PipelineConfig::default());

    let app = Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/api/process-keywords", post(process_keywords))
        .route("/api/process-csv", post(process_csv))
        .route("/api/cluster-keywords", post(cluster_keywords))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("🚀 Keyword Intent Analysis Service listening on {}", addr);
    info!("");
    info!("📊 Endpoints:");
    info!("   GET  /health                 - Health check");
    info!("   GET  /stats                  - Pipeline configuration");
    info!("   POST /api/process-keywords   - Classify a typed keyword list");
    info!("   POST /api/process-csv        - Classify an uploaded CSV/TXT file");
    info!("   POST /api/cluster-keywords   - Placeholder keyword clusters");
    info!("");
    info!("📝 Example:");
    info!(r#"   curl -X POST http://localhost:{}/api/process-keywords \"#, config.port);
    info!(r#"     -H 'Content-Type: application/json' \"#);
    info!(r#"     -d '{{"keywords": ["buy shoes"], "volumes": [500]}}'"#);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
