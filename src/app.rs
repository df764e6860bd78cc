use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/flashcards", post(handlers::generate_flashcards))
        .route("/api/mood", post(handlers::add_mood_entry))
        .route("/api/mood/entries", get(handlers::mood_entries))
        .route("/api/recipes", post(handlers::generate_recipes).get(handlers::saved_recipes))
        .route("/api/status", get(handlers::status))
        .with_state(state)
}
