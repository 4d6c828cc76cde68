use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DateRangeParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejected(rejection),
    };
    match state
        .get_events_by_date_range
        .handle(params.start, params.end)
        .await
    {
        Ok(events) => Json(events).into_response(),
        Err(error) => error.into_response(),
    }
}
