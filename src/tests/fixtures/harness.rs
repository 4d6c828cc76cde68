// In memory adapters wired the way the shell wires them, for use case tests.

use crate::modules::accounts::adapters::outbound::auth_provider_in_memory::InMemoryAuthProvider;
use crate::modules::accounts::adapters::outbound::user_directory_in_memory::InMemoryUserDirectory;
use crate::modules::accounts::core::ports::AuthRepository;
use crate::modules::accounts::core::user::User;
use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::modules::notifications::adapters::outbound::notification_scheduler_in_memory::InMemoryNotificationScheduler;
use crate::shell::state::AppState;
use crate::tests::fixtures::users::UserBuilder;
use std::sync::Arc;

pub type Users = InMemoryUserDirectory<InMemoryAuthProvider>;

pub struct Harness {
    pub auth: Arc<InMemoryAuthProvider>,
    pub users: Arc<Users>,
    pub events: Arc<InMemoryEventRepository>,
    pub notifications: Arc<InMemoryNotificationScheduler>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self::with(
            InMemoryEventRepository::new(),
            InMemoryNotificationScheduler::default(),
        )
    }

    pub fn with(
        events: InMemoryEventRepository,
        notifications: InMemoryNotificationScheduler,
    ) -> Self {
        let auth = Arc::new(InMemoryAuthProvider::new());
        Self {
            users: Arc::new(InMemoryUserDirectory::new(auth.clone())),
            auth,
            events: Arc::new(events),
            notifications: Arc::new(notifications),
        }
    }

    pub async fn sign_in_as(&self, id: &str) -> User {
        let user = UserBuilder::new()
            .id(id)
            .email(format!("{id}@example.com"))
            .build();
        self.auth.open_session(user).await
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.auth.clone(),
            self.users.clone(),
            self.events.clone(),
            self.notifications.clone(),
            15,
        )
    }

    pub async fn sign_out(&self) {
        self.auth.sign_out().await.unwrap();
    }
}
