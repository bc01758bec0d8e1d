pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers::handle_enhance;
use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/ai-enhance", post(handle_enhance))
        .route("/save-resume", post(handlers::handle_save_resume))
        .route("/resumes", get(handlers::handle_list_resumes))
        .route(
            "/resume/:id",
            get(handlers::handle_get_resume).delete(handlers::handle_delete_resume),
        )
        .with_state(state)
}
