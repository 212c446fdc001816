//! Axum HTTP boundary over the session manager.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/scenario/new` | Start (or restart) a session |
//! | POST | `/api/scenario/choice` | Submit a choice for the current stage |
//! | GET | `/api/scenario/status/{sessionId}` | Read-only progress |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::dto::{ChoiceRequest, ChoiceResponse, NewScenarioRequest, NewScenarioResponse};
use crate::error::{ErrorCode, SessionError};
use crate::session::SessionManager;

pub type AppState = Arc<SessionManager>;

pub fn create_router(manager: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/api/scenario/new", post(handle_new_scenario))
        .route("/api/scenario/choice", post(handle_choice))
        .route("/api/scenario/status/{session_id}", get(handle_status))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(manager)
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let code = self.code();
        match code {
            ErrorCode::Internal => error!(error = %self, "request failed"),
            ErrorCode::Generator => warn!(error = %self, "content source failed"),
            ErrorCode::Validation | ErrorCode::NotFound => {}
        }
        let status = StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status, &self.to_string()).into_response()
    }
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_new_scenario(
    State(manager): State<AppState>,
    payload: Result<Json<NewScenarioRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response(),
    };
    let Some(session_id) = req.session_id.as_deref().filter(|s| !s.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Session ID required").into_response();
    };

    match manager.start(session_id, &req.to_scenario_request()).await {
        Ok(started) => Json(NewScenarioResponse::from(started)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_choice(
    State(manager): State<AppState>,
    payload: Result<Json<ChoiceRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response(),
    };
    let (Some(session_id), Some(choice_index)) = (
        req.session_id.as_deref().filter(|s| !s.trim().is_empty()),
        req.choice_index,
    ) else {
        return error_response(StatusCode::BAD_REQUEST, "Session ID and choice index required").into_response();
    };
    let Ok(choice_index) = usize::try_from(choice_index) else {
        return error_response(StatusCode::BAD_REQUEST, "choiceIndex must be non-negative").into_response();
    };

    match manager.choose(session_id, choice_index).await {
        Ok(outcome) => Json(ChoiceResponse::from(outcome)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_status(State(manager): State<AppState>, Path(session_id): Path<String>) -> Response {
    match manager.status(&session_id).await {
        Ok(status) => Json(status).into_response(),
        Err(e) => e.into_response(),
    }
}
