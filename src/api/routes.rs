//! API Routes
//!
//! Configures the Axum router with all student endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    create_student, delete_student, get_student, health_handler, list_students,
    replace_student, update_student, AppState,
};
use super::landing::landing_handler;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Rendered landing page
/// - `GET|POST /students` - List or create students
/// - `GET|PUT|PATCH|DELETE /students/:id` - Single-student operations
/// - `GET /health` - Health check endpoint
///
/// Anything else is served from the static asset directory.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.static_dir);

    // Build router with all endpoints
    Router::new()
        .route("/", get(landing_handler))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student)
                .put(replace_student)
                .patch(update_student)
                .delete(delete_student),
        )
        .route("/health", get(health_handler))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
