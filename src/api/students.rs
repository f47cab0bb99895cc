//! Student record CRUD handlers
//!
//! List returns the live collection; create and delete run their
//! load-mutate-save sequence under the store's write lock so concurrent
//! mutations cannot drop each other's updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::model::{generate_id, CreateStudent, Student};
use crate::AppState;

/// GET /students
///
/// Returns the full collection, newest first. A missing or malformed data
/// file reads as an empty array.
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let students = state.store.load().await;
    debug!("Listing {} students", students.len());
    Json(students)
}

/// POST /students
///
/// Coerces and validates the payload, assigns a server-generated id,
/// prepends the record and persists the whole collection.
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudent>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = payload.into_student(generate_id())?;

    let _guard = state.store.lock_for_write().await;
    let mut students = state.store.load().await;
    students.insert(0, student.clone());

    if let Err(e) = state.store.save(&students).await {
        error!("Failed to persist new student: {}", e);
        return Err(ApiError::Persistence("failed to persist student".to_string()));
    }

    info!(id = %student.id, name = %student.name, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// DELETE /students/:id
///
/// Removes the first record whose id matches exactly; 404 when none does.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let _guard = state.store.lock_for_write().await;
    let mut students = state.store.load().await;

    match students.iter().position(|s| s.id == id) {
        Some(index) => {
            students.remove(index);
        }
        None => return Err(ApiError::NotFound),
    }

    state.store.save(&students).await?;

    info!(%id, "Student deleted");
    Ok(Json(json!({ "ok": true })))
}
