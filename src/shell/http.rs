use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::json;

use crate::modules::accounts::use_cases::request_password_reset::inbound::http as request_password_reset_http;
use crate::modules::accounts::use_cases::sign_in::inbound::http as sign_in_http;
use crate::modules::accounts::use_cases::sign_out::inbound::http as sign_out_http;
use crate::modules::accounts::use_cases::sign_up::inbound::http as sign_up_http;
use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_event_http;
use crate::modules::events::use_cases::get_events_by_date_range::inbound::http as get_events_by_date_range_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::modules::notifications::use_cases::cancel_notification::inbound::http as cancel_notification_http;
use crate::modules::notifications::use_cases::register_device_token::inbound::http as register_device_token_http;
use crate::modules::notifications::use_cases::schedule_event_notification::inbound::http as schedule_event_notification_http;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/sign-in", post(sign_in_http::handle))
        .route("/auth/sign-up", post(sign_up_http::handle))
        .route("/auth/sign-out", post(sign_out_http::handle))
        .route("/auth/password-reset", post(request_password_reset_http::handle))
        .route(
            "/events",
            get(get_events_by_date_range_http::handle).post(create_event_http::handle),
        )
        .route(
            "/events/{id}",
            get(get_event_http::handle)
                .patch(update_event_http::handle)
                .delete(delete_event_http::handle),
        )
        .route(
            "/events/{id}/notifications",
            post(schedule_event_notification_http::handle),
        )
        .route("/notifications/{id}", delete(cancel_notification_http::handle))
        .route("/devices", post(register_device_token_http::handle))
        .with_state(state)
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApplicationError::Authorization(_) => StatusCode::FORBIDDEN,
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApplicationError::Collaborator(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Response for a body or query string that does not match what the route expects.
pub fn rejected(rejection: impl std::fmt::Display) -> Response {
    tracing::debug!(%rejection, "rejected request");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": rejection.to_string() })),
    )
        .into_response()
}
