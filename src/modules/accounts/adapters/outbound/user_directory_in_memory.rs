// In memory user directory implementing the UserRepository port.
//
// Responsibilities
// - Mirror user profiles keyed by id, with a secondary index by lowercase email.
// - Delegate session questions to the authentication provider it wraps.

use crate::modules::accounts::core::ports::{AuthRepository, UserRepository};
use crate::modules::accounts::core::user::User;
use crate::shared::application::errors::RepositoryError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct InMemoryUserDirectory<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    auth: Arc<TAuth>,
    users: RwLock<HashMap<String, User>>,
    by_email: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl<TAuth> InMemoryUserDirectory<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    pub fn new(auth: Arc<TAuth>) -> Self {
        Self {
            auth,
            users: RwLock::new(HashMap::new()),
            by_email: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("User directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<TAuth> UserRepository for InMemoryUserDirectory<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        let id = self.by_email.read().await.get(&email.to_lowercase()).cloned();
        match id {
            Some(id) => self.get_user_by_id(&id).await,
            None => Ok(None),
        }
    }

    async fn save_user(&self, user: User) -> Result<User, RepositoryError> {
        self.ensure_online()?;
        {
            let mut users = self.users.write().await;
            if let Some(previous) = users.get(&user.id)
                && previous.email.to_lowercase() != user.email.to_lowercase()
            {
                self.by_email
                    .write()
                    .await
                    .remove(&previous.email.to_lowercase());
            }
            users.insert(user.id.clone(), user.clone());
        }
        self.by_email
            .write()
            .await
            .insert(user.email.to_lowercase(), user.id.clone());
        Ok(user)
    }

    async fn get_current_user(&self) -> Result<Option<User>, RepositoryError> {
        self.auth.get_current_user().await
    }

    async fn sign_out(&self) -> Result<(), RepositoryError> {
        self.auth.sign_out().await
    }
}
