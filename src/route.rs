use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(health_checker_handler))
        .route("/todoitems", get(get_todos).post(create_todo))
        .route("/todoitems/notStarted", get(get_not_started_todos))
        .route("/todoitems/inProgress", get(get_in_progress_todos))
        .route("/todoitems/completed", get(get_completed_todos))
        .route(
            "/todoitems/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
