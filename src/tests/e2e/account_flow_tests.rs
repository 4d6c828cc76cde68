use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::use_cases::sign_in::command::SignIn;
use crate::modules::accounts::use_cases::sign_up::command::SignUp;
use crate::shared::application::errors::{ApplicationError, ValidationError};
use crate::tests::fixtures::commands::create_event::CreateEventBuilder;
use crate::tests::fixtures::harness::Harness;

#[tokio::test]
async fn signs_up_creates_an_event_and_signs_out() {
    let harness = Harness::new();
    let state = harness.app_state();

    let rejected = state
        .sign_up
        .handle(SignUp {
            email: "ada@example.com".into(),
            password: "12345".into(),
            display_name: "Ada".into(),
        })
        .await;
    assert_eq!(
        rejected,
        Err(ApplicationError::Validation(
            ValidationError::PasswordTooShort { min: 6 }
        ))
    );

    let ada = state
        .sign_up
        .handle(SignUp {
            email: "ada@example.com".into(),
            password: "secret1".into(),
            display_name: "Ada".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        harness.users.get_user_by_email("ADA@example.com").await.unwrap(),
        Some(ada.clone())
    );

    let event = state
        .create_event
        .handle(CreateEventBuilder::new().build())
        .await
        .unwrap();
    assert_eq!(event.created_by, ada.id);
    assert_eq!(event.participants, vec![ada.id.clone()]);

    state.sign_out.handle().await.unwrap();
    state.sign_out.handle().await.unwrap();
    assert_eq!(
        state.create_event.handle(CreateEventBuilder::new().build()).await,
        Err(ApplicationError::unauthenticated())
    );

    let again = state
        .sign_in
        .handle(SignIn::EmailPassword {
            email: "ada@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(again.id, ada.id);
    assert_eq!(again.created_at, ada.created_at);
    assert!(again.last_login_at >= ada.last_login_at);
}
