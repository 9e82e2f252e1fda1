pub mod health;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::evaluation::handlers::handle_evaluate;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Question generation
        .route(
            "/api/interview-questions",
            post(handlers::handle_interview_questions),
        )
        .route("/api/question", post(handlers::handle_coding_question))
        .route(
            "/api/question/behavioral",
            get(handlers::handle_behavioral_question),
        )
        .route(
            "/api/question/system-design",
            get(handlers::handle_system_design_question),
        )
        .route("/api/top-questions", post(handlers::handle_top_questions))
        // Scoring
        .route("/api/evaluate", post(handle_evaluate))
        .with_state(state)
}

/// CORS restricted to the configured client origins.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
