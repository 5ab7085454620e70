//! HTTP server: JSON API plus the two HTML pages.
//!
//! Every handler is a single stateless read against the shared pool.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/lawyer/{id}` | Full profile, `404` when absent |
//! | `GET`  | `/api/search?query=&location=` | Matching profile summaries |
//! | `GET`  | `/api/suggestions?query=` | Up to ten distinct suggestion strings |
//! | `GET`  | `/health` | Health check (returns version) |
//! | `GET`  | `/` | Landing page; runs a search when parameters are present |
//! | `GET`  | `/lawyer/{id}` | Profile page |
//!
//! Anything else falls through to static files under `[server].public_dir`.
//!
//! # Error Contract
//!
//! ```json
//! { "error": "Lawyer not found" }
//! ```
//!
//! `404` is only produced by the lawyer lookup. Every other failure is
//! logged and answered with `500` and a generic per-endpoint message.
//!
//! Query strings are read as raw key/value pairs, so a repeated or unknown
//! parameter never turns into an extractor rejection. The first value of a
//! repeated key wins.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db;
use crate::error::DirectoryError;
use crate::get::get_lawyer_by_raw_id;
use crate::migrate::migrate_pool;
use crate::models::{Lawyer, LawyerSummary};
use crate::pages::{LandingView, Pages};
use crate::search::{search_lawyers, SearchParams};
use crate::suggest::{fetch_suggestions, SuggestionParams};

const LOOKUP_FAILED: &str = "An error occurred while fetching lawyer details";
const SEARCH_FAILED: &str = "An error occurred while searching for lawyers";
const SUGGESTIONS_FAILED: &str = "An error occurred while fetching suggestions";

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
    pages: Arc<Pages>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            pool,
            pages: Arc::new(Pages::new()?),
            config: Arc::new(config),
        })
    }
}

/// Builds the full router for `state`.
pub fn router(state: AppState) -> Router {
    let public_dir = state.config.server.public_dir.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_landing))
        .route("/lawyer/{id}", get(handle_lawyer_page))
        .route("/api/lawyer/{id}", get(handle_get_lawyer))
        .route("/api/search", get(handle_search))
        .route("/api/suggestions", get(handle_suggestions))
        .route("/health", get(handle_health))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the HTTP server.
///
/// Brings the schema and folded search columns up to date, then binds to
/// `[server].bind` and serves until Ctrl-C.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(config).await?;
    migrate_pool(&pool).await?;
    let app = router(AppState::new(pool.clone(), config.clone())?);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        message: message.into(),
    }
}

fn internal_error(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.into(),
    }
}

/// Maps a directory error to a response. Not-found keeps its meaning; any
/// other fault is logged and replaced by `generic`.
fn classify_directory_error(err: DirectoryError, generic: &str) -> AppError {
    if err.is_not_found() {
        return not_found("Lawyer not found");
    }
    tracing::error!(error = %err, "{}", generic);
    internal_error(generic)
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /api/lawyer/{id} ============

async fn handle_get_lawyer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lawyer>, AppError> {
    get_lawyer_by_raw_id(&state.pool, &id)
        .await
        .map(Json)
        .map_err(|e| classify_directory_error(e, LOOKUP_FAILED))
}

// ============ GET /api/search ============

async fn handle_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<LawyerSummary>>, AppError> {
    let params = SearchParams::from_pairs(pairs);
    search_lawyers(&state.pool, &params)
        .await
        .map(Json)
        .map_err(|e| classify_directory_error(e, SEARCH_FAILED))
}

// ============ GET /api/suggestions ============

async fn handle_suggestions(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<String>>, AppError> {
    let text = SuggestionParams::from_pairs(pairs).query.unwrap_or_default();
    fetch_suggestions(&state.pool, &text, state.config.suggestions.max_rows)
        .await
        .map(Json)
        .map_err(|e| classify_directory_error(e, SUGGESTIONS_FAILED))
}

// ============ Pages ============

fn html_response(status: StatusCode, rendered: Result<String, tera::Error>) -> Response {
    match rendered {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Landing page. A failed search renders as an empty result grid.
async fn handle_landing(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from_pairs(pairs);
    let results = if params.is_submitted() {
        match search_lawyers(&state.pool, &params).await {
            Ok(results) => results,
            Err(e) => {
                tracing::error!(error = %e, "{}", SEARCH_FAILED);
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let view = LandingView {
        query: params.query.as_deref().unwrap_or(""),
        location: params.location.as_deref().unwrap_or(""),
        results: &results,
        min_suggestion_chars: state.config.suggestions.min_chars,
    };
    html_response(StatusCode::OK, state.pages.render_landing(&view))
}

async fn handle_lawyer_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match get_lawyer_by_raw_id(&state.pool, &id).await {
        Ok(lawyer) => html_response(StatusCode::OK, state.pages.render_lawyer(&lawyer)),
        Err(e) if e.is_not_found() => html_response(
            StatusCode::NOT_FOUND,
            state
                .pages
                .render_message("Lawyer not found", "No lawyer matches that profile link."),
        ),
        Err(e) => {
            tracing::error!(error = %e, "{}", LOOKUP_FAILED);
            html_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                state.pages.render_message("Something went wrong", LOOKUP_FAILED),
            )
        }
    }
}
