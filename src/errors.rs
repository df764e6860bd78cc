use crate::models::{Panel, PanelStatus};
use crate::ui::render_error;
use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use thiserror::Error;
use tracing::debug;

const MALFORMED_BODY: &str = "Request body must be a JSON object with string fields";

/// How a user action can fail before it settles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Missing required input; raised before any request is made.
    #[error("{0}")]
    Input(&'static str),

    /// The backend answered but rejected the request.
    #[error("{0}")]
    Remote(String),

    /// The request never completed, or the reply was not JSON.
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let status = match err {
            ClientError::Input(_) => StatusCode::BAD_REQUEST,
            ClientError::Remote(_) => StatusCode::BAD_GATEWAY,
            ClientError::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("rejected request body: {rejection}");
        ClientError::Input(MALFORMED_BODY).into()
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let panel = Panel {
            status: PanelStatus::Error,
            html: render_error(&self.message),
            message: Some(self.message),
        };
        (self.status, Json(panel)).into_response()
    }
}
