use crate::modules::accounts::core::user::User;
use crate::modules::accounts::use_cases::sign_in::command::SignIn;
use crate::modules::accounts::use_cases::sign_up::command::SignUp;
use crate::modules::events::core::event::EventPatch;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::modules::events::use_cases::watch_events::handler::WatchEventsHandler;
use crate::modules::notifications::use_cases::schedule_event_notification::command::ScheduleEventNotification;
use crate::shared::application::errors::{ApplicationError, ValidationError};
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::create_event::CreateEventBuilder;
use crate::tests::fixtures::harness::Harness;
use chrono::{Duration, TimeZone, Utc};

async fn sign_up(state: &AppState, name: &str) -> User {
    state
        .sign_up
        .handle(SignUp {
            email: format!("{name}@example.com"),
            password: "secret1".into(),
            display_name: name.into(),
        })
        .await
        .unwrap()
}

async fn sign_in(state: &AppState, name: &str) -> User {
    state
        .sign_in
        .handle(SignIn::EmailPassword {
            email: format!("{name}@example.com"),
            password: "secret1".into(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn shares_an_event_but_keeps_it_owned_by_its_creator() {
    let harness = Harness::new();
    let state = harness.app_state();
    let bob = sign_up(&state, "bob").await;
    state.sign_out.handle().await.unwrap();
    let alice = sign_up(&state, "alice").await;

    let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let created = state
        .create_event
        .handle(
            CreateEventBuilder::new()
                .title("Standup")
                .start_date(start)
                .end_date(start + Duration::minutes(30))
                .participants(vec![bob.id.clone(), alice.id.clone(), bob.id.clone()])
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(created.participants, vec![bob.id.clone(), alice.id.clone()]);

    state.sign_out.handle().await.unwrap();
    sign_in(&state, "bob").await;

    let listed = state
        .get_events_by_date_range
        .handle(start - Duration::days(1), start + Duration::days(1))
        .await
        .unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let deleted = state.delete_event.handle(&created.id).await;
    assert!(matches!(deleted, Err(ApplicationError::Authorization(_))));
    let renamed = state
        .update_event
        .handle(UpdateEvent {
            event_id: created.id.clone(),
            patch: EventPatch {
                title: Some("Bob's standup".into()),
                ..EventPatch::default()
            },
        })
        .await;
    assert!(matches!(renamed, Err(ApplicationError::Authorization(_))));
    assert_eq!(state.get_event.handle(&created.id).await.unwrap(), created);

    state.sign_out.handle().await.unwrap();
    sign_in(&state, "alice").await;

    let inverted = state
        .update_event
        .handle(UpdateEvent {
            event_id: created.id.clone(),
            patch: EventPatch {
                start_date: Some(start + Duration::days(1) + Duration::hours(1)),
                end_date: Some(start + Duration::days(1)),
                ..EventPatch::default()
            },
        })
        .await;
    assert_eq!(
        inverted,
        Err(ApplicationError::Validation(ValidationError::InvalidInterval))
    );

    let renamed = state
        .update_event
        .handle(UpdateEvent {
            event_id: created.id.clone(),
            patch: EventPatch {
                title: Some("Daily".into()),
                ..EventPatch::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(renamed.title, "Daily");
    assert_eq!(renamed.created_by, alice.id);

    state.delete_event.handle(&created.id).await.unwrap();
    assert!(matches!(
        state.get_event.handle(&created.id).await,
        Err(ApplicationError::NotFound { .. })
    ));
}

#[tokio::test]
async fn schedules_and_cancels_a_reminder_for_an_upcoming_event() {
    let harness = Harness::new();
    let state = harness.app_state();
    sign_up(&state, "alice").await;

    let start = Utc::now() + Duration::hours(2);
    let created = state
        .create_event
        .handle(
            CreateEventBuilder::new()
                .start_date(start)
                .end_date(start + Duration::minutes(30))
                .build(),
        )
        .await
        .unwrap();

    let notification_id = state
        .schedule_event_notification
        .handle(ScheduleEventNotification::new(created.id.clone()))
        .await
        .unwrap();
    let scheduled = harness
        .notifications
        .scheduled(&notification_id)
        .await
        .unwrap();
    assert_eq!(scheduled.date, start - Duration::minutes(15));
    assert_eq!(scheduled.title, created.title);

    state
        .cancel_notification
        .handle(&notification_id)
        .await
        .unwrap();
    assert_eq!(harness.notifications.scheduled_count().await, 0);
}

#[tokio::test]
async fn feeds_the_creator_a_snapshot_after_each_change() {
    let harness = Harness::new();
    let state = harness.app_state();
    sign_up(&state, "alice").await;
    let watch = WatchEventsHandler::new(harness.events.clone(), harness.users.clone());

    let mut feed = watch.handle().await.unwrap();
    assert_eq!(feed.recv().await, Some(vec![]));

    let created = state
        .create_event
        .handle(CreateEventBuilder::new().build())
        .await
        .unwrap();
    assert_eq!(feed.recv().await, Some(vec![created.clone()]));

    state.delete_event.handle(&created.id).await.unwrap();
    assert_eq!(feed.recv().await, Some(vec![]));

    feed.detach().await;
}
