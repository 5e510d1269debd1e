//! API Handlers
//!
//! HTTP request handlers for each student endpoint. Each handler issues
//! exactly one store call.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info, warn};

use super::extract::StudentBody;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::i18n::Locale;
use crate::models::{
    DeleteResponse, HealthResponse, SaveResponse, Student, StudentPayload, UpdateResponse,
};
use crate::store::{StoreError, StudentStore};

/// Application state shared across all handlers.
///
/// The store handle is created once at startup and shared read-only; the
/// backend manages its own connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Injected student store
    pub store: Arc<dyn StudentStore>,
    /// Language of user-facing messages
    pub locale: Locale,
    /// Directory of static front-end assets
    pub static_dir: PathBuf,
    /// Directory holding the landing page template
    pub views_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState with the given store and default directories.
    pub fn new(store: Arc<dyn StudentStore>, locale: Locale) -> Self {
        let defaults = Config::default();
        Self {
            store,
            locale,
            static_dir: defaults.static_dir,
            views_dir: defaults.views_dir,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config, store: Arc<dyn StudentStore>) -> Self {
        Self {
            store,
            locale: config.locale,
            static_dir: config.static_dir.clone(),
            views_dir: config.views_dir.clone(),
        }
    }

    fn read_error(&self, source: StoreError) -> ApiError {
        ApiError::Read {
            message: self.locale.messages().read_failed,
            source,
        }
    }
}

/// Handler for GET /students
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    let students = state
        .store
        .find_all()
        .await
        .map_err(|e| state.read_error(e))?;

    debug!(count = students.len(), "listed students");
    Ok(Json(students))
}

/// Handler for GET /students/:id
///
/// An unknown identifier yields `null`, not a 404.
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Student>>> {
    let student = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| state.read_error(e))?;

    Ok(Json(student))
}

/// Handler for POST /students
pub async fn create_student(
    State(state): State<AppState>,
    StudentBody(payload): StudentBody<StudentPayload>,
) -> Result<Json<SaveResponse>> {
    let student = payload.into_new_student()?;
    let saved = state.store.insert(student).await.map_err(ApiError::Write)?;

    info!(id = %saved.id, "student created");
    Ok(Json(SaveResponse::new(
        state.locale.messages().created,
        saved,
    )))
}

/// Handler for PUT /students/:id
///
/// Replaces every mutable field after validating the full payload.
pub async fn replace_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    StudentBody(payload): StudentBody<StudentPayload>,
) -> Result<Json<UpdateResponse>> {
    let student = payload.into_new_student()?;
    let updated = state
        .store
        .replace(&id, student)
        .await
        .map_err(ApiError::Write)?;

    if updated.is_none() {
        warn!(%id, "full update matched no student");
    }
    Ok(Json(UpdateResponse::new(
        state.locale.messages().updated,
        updated,
    )))
}

/// Handler for PATCH /students/:id
///
/// Only the supplied fields are validated and written.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    StudentBody(payload): StudentBody<StudentPayload>,
) -> Result<Json<UpdateResponse>> {
    let patch = payload.into_patch()?;
    let updated = state
        .store
        .update(&id, patch)
        .await
        .map_err(ApiError::Write)?;

    if updated.is_none() {
        warn!(%id, "partial update matched no student");
    }
    Ok(Json(UpdateResponse::new(
        state.locale.messages().updated,
        updated,
    )))
}

/// Handler for DELETE /students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let outcome = state.store.delete(&id).await.map_err(ApiError::Write)?;

    info!(%id, deleted = outcome.deleted_count, "student delete processed");
    Ok(Json(DeleteResponse::new(
        state.locale.messages().deleted,
        outcome,
    )))
}

/// Handler for GET /health
///
/// Always 200; the body reports whether the store answered a ping.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_up = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(backend = state.store.backend(), error = %e, "store ping failed");
            false
        }
    };

    Json(HealthResponse::new(storage_up))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{new_object_id, MemoryStore};

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), Locale::En)
    }

    fn payload(name: &str) -> StudentPayload {
        StudentPayload {
            name: Some(name.to_string()),
            age: Some(20),
            major: Some("CS".to_string()),
            merit: Some(100.0),
            other: Some(0.0),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let created = create_student(State(state.clone()), StudentBody(payload("Alice")))
            .await
            .unwrap();
        assert_eq!(created.msg, "Data has been added successfully!");
        let id = created.save_object.id.clone();

        let fetched = get_student(State(state), Path(id)).await.unwrap();
        assert_eq!(fetched.0, Some(created.save_object.clone()));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_null() {
        let state = test_state();

        let fetched = get_student(State(state), Path(new_object_id())).await.unwrap();
        assert!(fetched.0.is_none());
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_read_error() {
        let state = test_state();

        let result = get_student(State(state), Path("nope".to_string())).await;
        assert!(matches!(result, Err(ApiError::Read { .. })));
    }

    #[tokio::test]
    async fn test_create_invalid_payload() {
        let state = test_state();

        let result = create_student(
            State(state.clone()),
            StudentBody(StudentPayload {
                name: None,
                ..payload("unused")
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let listed = list_students(State(state)).await.unwrap();
        assert!(listed.0.is_empty());
    }

    #[tokio::test]
    async fn test_replace_and_patch_handlers() {
        let state = test_state();
        let created = create_student(State(state.clone()), StudentBody(payload("Alice")))
            .await
            .unwrap();
        let id = created.save_object.id.clone();

        let replaced = replace_student(
            State(state.clone()),
            Path(id.clone()),
            StudentBody(payload("Bob")),
        )
        .await
        .unwrap();
        assert_eq!(replaced.updated_data.as_ref().unwrap().name, "Bob");

        let patched = update_student(
            State(state),
            Path(id),
            StudentBody(StudentPayload {
                age: Some(33),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        let data = patched.updated_data.as_ref().unwrap();
        assert_eq!(data.age, 33);
        assert_eq!(data.name, "Bob");
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        let created = create_student(State(state.clone()), StudentBody(payload("Alice")))
            .await
            .unwrap();
        let id = created.save_object.id.clone();

        let first = delete_student(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(first.delete_result.deleted_count, 1);

        let second = delete_student(State(state), Path(id)).await.unwrap();
        assert_eq!(second.delete_result.deleted_count, 0);
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_write_error() {
        let state = test_state();

        let result = delete_student(State(state), Path("bad".to_string())).await;
        assert!(matches!(result, Err(ApiError::Write(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(test_state())).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.storage, "up");
    }
}
