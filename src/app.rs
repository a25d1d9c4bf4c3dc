use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/week", post(handlers::week_form))
        .route("/track", post(handlers::track_form))
        .route("/export.xml", get(handlers::export_xml))
        .route("/api/range", get(handlers::get_range))
        .route("/api/view", get(handlers::get_view))
        .route("/api/week", post(handlers::week_json))
        .route("/api/track", post(handlers::track_json))
        .with_state(state)
}
