// In memory implementation of the AuthRepository port.
//
// Purpose
// - Stand in for the hosted authentication provider in tests and local development.
//
// Responsibilities
// - Keep registered email accounts and the single active session of this client.
// - Publish session changes to auth state subscribers.
// - Federated providers are not available here and report NotImplemented.

use crate::modules::accounts::core::ports::AuthRepository;
use crate::modules::accounts::core::user::User;
use crate::shared::application::errors::RepositoryError;
use crate::shared::infrastructure::subscriptions::{SubscriberRegistry, Subscription};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

const SESSION_KEY: &str = "session";

#[derive(Debug, Clone)]
struct Account {
    password: String,
    user: User,
}

pub struct InMemoryAuthProvider {
    accounts: RwLock<HashMap<String, Account>>,
    session: RwLock<Option<User>>,
    password_resets: RwLock<Vec<String>>,
    subscribers: Arc<SubscriberRegistry<Option<User>>>,
    is_offline: bool,
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            session: RwLock::new(None),
            password_resets: RwLock::new(Vec::new()),
            subscribers: SubscriberRegistry::new(),
            is_offline: false,
        }
    }
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Emails a password reset was sent to, oldest first.
    pub async fn password_resets(&self) -> Vec<String> {
        self.password_resets.read().await.clone()
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Authentication service offline".into()));
        }
        Ok(())
    }

    /// Opens a session for `user` without checking credentials.
    pub async fn open_session(&self, user: User) -> User {
        *self.session.write().await = Some(user.clone());
        let published = Some(user.clone());
        self.subscribers.publish_with(|_| published.clone()).await;
        user
    }
}

#[async_trait::async_trait]
impl AuthRepository for InMemoryAuthProvider {
    async fn sign_in_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, RepositoryError> {
        self.ensure_online()?;
        let user = {
            let mut accounts = self.accounts.write().await;
            let account = accounts
                .get_mut(&email.to_lowercase())
                .filter(|account| account.password == password)
                .ok_or_else(|| {
                    RepositoryError::InvalidCredentials("wrong email or password".into())
                })?;
            account.user.last_login_at = Utc::now();
            account.user.clone()
        };
        Ok(self.open_session(user).await)
    }

    async fn sign_up_with_email_password(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, RepositoryError> {
        self.ensure_online()?;
        let key = email.to_lowercase();
        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&key) {
                return Err(RepositoryError::Backend(format!(
                    "email already in use: {email}"
                )));
            }
            let now = Utc::now();
            let user = User {
                id: Uuid::now_v7().to_string(),
                email: email.to_string(),
                display_name: display_name.to_string(),
                photo_url: None,
                created_at: now,
                last_login_at: now,
            };
            accounts.insert(
                key,
                Account {
                    password: password.to_string(),
                    user: user.clone(),
                },
            );
            user
        };
        Ok(self.open_session(user).await)
    }

    async fn sign_in_with_google(&self) -> Result<User, RepositoryError> {
        Err(RepositoryError::NotImplemented(
            "Google sign-in requires an OAuth client".into(),
        ))
    }

    async fn sign_in_with_apple(&self) -> Result<User, RepositoryError> {
        Err(RepositoryError::NotImplemented(
            "Apple sign-in is not available".into(),
        ))
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        // Unknown addresses are accepted silently.
        if self.accounts.read().await.contains_key(&email.to_lowercase()) {
            self.password_resets.write().await.push(email.to_string());
        }
        Ok(())
    }

    async fn get_current_user(&self) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.session.read().await.clone())
    }

    async fn sign_out(&self) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let previous = self.session.write().await.take();
        if previous.is_some() {
            self.subscribers.publish_with(|_| None).await;
        }
        Ok(())
    }

    async fn on_auth_state_changed(&self) -> Subscription<Option<User>> {
        let session = self.session.read().await;
        self.subscribers.register(SESSION_KEY, session.clone()).await
    }
}
