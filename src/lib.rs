//! sims - Student Information Management System
//!
//! Single-binary web application: a JSON-file-backed student record API, an
//! LLM analysis proxy, and an embedded browser UI.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod model;
pub mod store;

use llm::ChatClient;
use store::RecordStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Flat-file student record store
    pub store: Arc<RecordStore>,
    /// Upstream chat client; `None` when no API key is configured
    pub llm: Option<Arc<ChatClient>>,
}

impl AppState {
    pub fn new(store: RecordStore, llm: Option<ChatClient>) -> Self {
        Self {
            store: Arc::new(store),
            llm: llm.map(Arc::new),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/students", get(api::list_students).post(api::create_student))
        .route("/students/:id", delete(api::delete_student))
        .route("/llm/chat", post(api::chat))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/style.css", get(api::serve_style_css))
        .merge(api::health_routes())
        .with_state(state)
}
