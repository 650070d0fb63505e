//! HTTP Router - The proxy endpoint and a server-side filter view
//!
//! | route                | behaviour                                        |
//! |----------------------|--------------------------------------------------|
//! | `GET /api/data`      | relay the upstream document verbatim             |
//! | `GET /api/employees` | load, filter with the query string, return rows  |
//! | `GET /health`        | liveness                                         |
//!
//! Any upstream failure maps to `500 {"error": "Internal Server Error"}`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use devdir_domain::{FetchError, FilterEngine, FilterState};
use devdir_usecase::EmployeeSource;
use serde::{Deserialize, Serialize};
use shared::{DevdirError, DirectoryConfig};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::gateway::upstream::UpstreamClient;
use crate::record::EmployeeRecord;
use crate::source::HttpEmployeeSource;

/// Body returned for every upstream failure
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Server state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    upstream: Arc<UpstreamClient>,
    source: Arc<dyn EmployeeSource>,
}

impl AppState {
    /// State whose employee source reads through the same upstream client
    pub fn new(upstream: UpstreamClient) -> Self {
        let upstream = Arc::new(upstream);
        let source = Arc::new(HttpEmployeeSource::new(Arc::clone(&upstream)));
        Self { upstream, source }
    }

    /// Replace the source behind `/api/employees`
    pub fn with_source(mut self, source: Arc<dyn EmployeeSource>) -> Self {
        self.source = source;
        self
    }
}

/// Standard error body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Query parameters for `/api/employees`
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    /// Comma-separated skill names
    #[serde(default)]
    pub skills: Option<String>,
}

impl EmployeeQuery {
    /// Translate the query string into filter criteria
    pub fn to_state(&self) -> FilterState {
        let skills = self
            .skills
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty());

        FilterState::new()
            .with_name_query(self.name.clone().unwrap_or_default())
            .with_designation_query(self.designation.clone().unwrap_or_default())
            .with_skills(skills)
    }
}

/// Response body for `/api/employees`
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeesResponse {
    pub employees: Vec<EmployeeRecord>,
    pub total: usize,
    pub visible: usize,
}

/// Build the router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/employees", get(get_employees))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn run_server(config: &DirectoryConfig) -> shared::Result<()> {
    let addr = config.bind_addr()?;
    let upstream =
        UpstreamClient::from_config(config).map_err(|e| DevdirError::Fetch(e.to_string()))?;
    let app = build_router(AppState::new(upstream));

    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream_url,
        "Directory server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Directory server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

fn internal_error(route: &str, err: &FetchError) -> Response {
    error!(route, kind = err.kind(), "Upstream failure: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: INTERNAL_SERVER_ERROR.to_string(),
        }),
    )
        .into_response()
}

async fn get_data(State(state): State<AppState>) -> Response {
    match state.upstream.fetch_document().await {
        Ok(body) => {
            info!(route = "/api/data", bytes = body.len(), "Relayed upstream document");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(err) => internal_error("/api/data", &err),
    }
}

async fn get_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Response {
    let employees = match state.source.load().await {
        Ok(employees) => employees,
        Err(err) => return internal_error("/api/employees", &err),
    };

    let mut engine = FilterEngine::new(employees);
    let event = engine.apply(query.to_state());
    info!(route = "/api/employees", ?event, "Filtered employees");

    let body = EmployeesResponse {
        employees: engine
            .visible()
            .into_iter()
            .map(EmployeeRecord::from)
            .collect(),
        total: engine.full_list().len(),
        visible: engine.visible_len(),
    };
    Json(body).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_to_state() {
        let query = EmployeeQuery {
            name: Some(" al ".to_string()),
            designation: None,
            skills: Some("Python, SQL,,".to_string()),
        };

        let state = query.to_state();
        assert_eq!(state.name_query(), " al ");
        assert_eq!(state.designation_query(), "");
        let skills: Vec<&str> = state.selected_skills().iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_empty_query_is_empty_state() {
        assert!(EmployeeQuery::default().to_state().is_empty());
    }
}
