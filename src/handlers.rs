use crate::errors::AppError;
use crate::models::{IndexQuery, IngredientsRequest, Panel, PanelStatus, StatusResponse, TextRequest};
use crate::orchestrator::{History, Origin};
use crate::state::AppState;
use crate::ui::{
    render_flashcards, render_index, render_mood, render_mood_entries, render_notice,
    render_recipes, render_saved_recipes, Tab,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let tab = Tab::from_query(query.tab.as_deref());
    Html(render_index(tab, state.orchestrator.mode()))
}

pub async fn generate_flashcards(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Panel>, AppError> {
    let Json(payload) = payload?;
    let outcome = state.orchestrator.generate_flashcards(&payload.text).await?;
    let html = render_flashcards(
        &outcome.value.flashcards,
        outcome.origin,
        outcome.value.message.as_deref(),
    );
    Ok(Json(settled_panel(outcome.origin, html, outcome.absorbed)))
}

pub async fn add_mood_entry(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Panel>, AppError> {
    let Json(payload) = payload?;
    let outcome = state.orchestrator.analyze_mood(&payload.text).await?;
    let html = render_mood(&outcome.value, outcome.origin);
    Ok(Json(settled_panel(outcome.origin, html, outcome.absorbed)))
}

pub async fn generate_recipes(
    State(state): State<AppState>,
    payload: Result<Json<IngredientsRequest>, JsonRejection>,
) -> Result<Json<Panel>, AppError> {
    let Json(payload) = payload?;
    let outcome = state.orchestrator.generate_recipes(&payload.ingredients).await?;
    let html = render_recipes(
        &outcome.value.recipes,
        outcome.origin,
        outcome.value.message.as_deref(),
    );
    Ok(Json(settled_panel(outcome.origin, html, outcome.absorbed)))
}

pub async fn mood_entries(State(state): State<AppState>) -> Result<Json<Panel>, AppError> {
    let panel = match state.orchestrator.mood_entries().await? {
        History::Items(entries) => live_panel(render_mood_entries(&entries)),
        History::RequiresBackend(notice) => notice_panel(notice),
    };
    Ok(Json(panel))
}

pub async fn saved_recipes(State(state): State<AppState>) -> Result<Json<Panel>, AppError> {
    let panel = match state.orchestrator.saved_recipes().await? {
        History::Items(recipes) => live_panel(render_saved_recipes(&recipes)),
        History::RequiresBackend(notice) => notice_panel(notice),
    };
    Ok(Json(panel))
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let orchestrator = &state.orchestrator;
    Json(StatusResponse {
        mode: orchestrator.mode().to_string(),
        api_base: orchestrator.transport().base().to_string(),
        backend: orchestrator.backend_status().await,
    })
}

fn settled_panel(origin: Origin, html: String, absorbed: Option<String>) -> Panel {
    let status = match origin {
        Origin::Live => PanelStatus::Live,
        Origin::Demo => PanelStatus::Demo,
    };
    Panel {
        status,
        html,
        message: absorbed,
    }
}

fn live_panel(html: String) -> Panel {
    Panel {
        status: PanelStatus::Live,
        html,
        message: None,
    }
}

fn notice_panel(notice: &str) -> Panel {
    Panel {
        status: PanelStatus::Notice,
        html: render_notice(notice),
        message: Some(notice.to_string()),
    }
}
