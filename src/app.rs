use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::tracker))
        .route("/settings", get(handlers::settings))
        .route("/api/week/:week", get(handlers::get_week))
        .route("/api/week/:week/days", get(handlers::week_days))
        .route("/api/week/:week/exercise", post(handlers::add_exercise))
        .route(
            "/api/week/:week/exercise/reorder",
            post(handlers::reorder_exercise),
        )
        .route(
            "/api/week/:week/exercise/:category/:id",
            delete(handlers::remove_exercise),
        )
        .route("/api/week/:week/schedule/toggle", post(handlers::toggle_day))
        .route("/api/week/:week/day/:day/complete", post(handlers::complete))
        .with_state(state)
}
