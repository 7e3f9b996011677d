//! speechpath-api
//!
//! HTTP surface for therapy plans. Handlers stay thin: validation and
//! selection live in `speechpath-planner`, persistence in `speechpath-storage`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/diagnoses", get(routes::diagnoses::list_diagnoses))
        .route("/therapy-plans", post(routes::plans::create_plan))
        .route("/therapy-plans/generate", post(routes::plans::generate_plan))
        .route(
            "/therapy-plans/patient/{patient_id}",
            get(routes::plans::get_plan),
        )
        .route(
            "/therapy-plans/{patient_id}",
            put(routes::plans::update_plan).delete(routes::plans::delete_plan),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
