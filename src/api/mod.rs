//! HTTP API handlers for sims

pub mod chat;
pub mod health;
pub mod students;
pub mod ui;

pub use chat::chat;
pub use health::health_routes;
pub use students::{create_student, delete_student, list_students};
pub use ui::{serve_app_js, serve_index, serve_style_css};
