//! PlanFact API Server
//!
//! Read-only analytics backend for the project/task dashboards: counts,
//! averages, per-user breakdowns, and monthly completion burndowns computed
//! on demand from the task store and the hosted user directory.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{DirectoryClient, PostgresProjectRepository, PostgresTaskRepository};
use app::AnalyticsService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<
        AnalyticsService<PostgresProjectRepository, PostgresTaskRepository, DirectoryClient>,
    >,
    pub project_repo: Arc<PostgresProjectRepository>,
    pub task_repo: Arc<PostgresTaskRepository>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,planfact_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PlanFact API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let project_repo = Arc::new(PostgresProjectRepository::new(db.clone()));
    let task_repo = Arc::new(PostgresTaskRepository::new(db.clone()));

    let directory = Arc::new(DirectoryClient::new(
        config.directory_url.clone(),
        config.directory_secret_key.clone(),
    ));

    // Create application services
    let analytics_service = Arc::new(AnalyticsService::new(
        project_repo.clone(),
        task_repo.clone(),
        directory.clone(),
    ));

    // Create app state
    let state = AppState {
        analytics_service,
        project_repo,
        task_repo,
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Project reads
        .route("/projects", get(handlers::list_projects))
        .route("/projects/:id", get(handlers::get_project))
        .route("/projects/:id/tasks", get(handlers::list_project_tasks))
        // Analytics
        .route("/analytics/projects", get(handlers::get_projects_analytics))
        .route(
            "/analytics/projects/overdue",
            get(handlers::get_overdue_projects),
        )
        .route(
            "/analytics/projects/:id/monitoring",
            get(handlers::get_project_monitoring_stats),
        )
        .route(
            "/analytics/projects/:id/burndown",
            get(handlers::get_project_tasks_burndown),
        )
        .route("/analytics/users", get(handlers::get_users_breakdown))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
