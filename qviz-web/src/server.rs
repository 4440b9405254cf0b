//! Axum HTTP server: stateless endpoints for the visualizer frontend.
//!
//! Each request computes from its own input against the shared
//! `Arc<AppContext>`; there is no per-request state.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Slider + bar chart page |
//! | GET | `/health` | Health check |
//! | GET | `/api/chart` | Chart spec for a given angle |

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::context::AppContext;
use qviz_chart::ChartSpec;

pub type AppState = Arc<AppContext>;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub fn create_router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health_check))
        .route("/api/chart", get(handle_get_chart))
        .layer(cors)
        .with_state(ctx)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChartQuery {
    angle: f64,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_chart(
    State(ctx): State<AppState>,
    Query(params): Query<ChartQuery>,
) -> Result<Json<ChartSpec>, (StatusCode, Json<serde_json::Value>)> {
    ctx.chart_for(params.angle)
        .map(Json)
        .map_err(|err| error_response(StatusCode::BAD_REQUEST, &err.to_string()))
}
