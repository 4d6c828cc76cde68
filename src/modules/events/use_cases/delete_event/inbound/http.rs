use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.delete_event.handle(&event_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod delete_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::modules::events::core::ports::EventRepository;
    use crate::tests::fixtures::events::event::EventBuilder;
    use crate::tests::fixtures::harness::Harness;

    use super::handle;

    async fn arrange() -> Harness {
        let harness = Harness::new();
        harness
            .events
            .insert(EventBuilder::new().id("e1").created_by("u1").build())
            .await;
        harness
    }

    fn app(harness: &Harness) -> Router {
        Router::new()
            .route("/events/{id}", delete(handle))
            .with_state(harness.app_state())
    }

    fn request(id: &str) -> Request<Body> {
        Request::delete(format!("/events/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_204_when_the_creator_deletes() {
        let harness = arrange().await;
        harness.sign_in_as("u1").await;

        let response = app(&harness).oneshot(request("e1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(harness.events.get_event_by_id("e1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn it_should_return_403_and_keep_the_event_for_a_non_owner() {
        let harness = arrange().await;
        harness.sign_in_as("u2").await;

        let response = app(&harness).oneshot(request("e1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(harness.events.get_event_by_id("e1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_missing_event() {
        let harness = arrange().await;
        harness.sign_in_as("u1").await;
        let response = app(&harness).oneshot(request("missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
