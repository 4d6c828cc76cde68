// Ports for identity: the authentication provider and the user directory.
//
// Boundaries
// - Adapters implement these traits. Use cases only see the traits.
// - `UserRepository::get_current_user` is what every authenticated use case consults.

use crate::modules::accounts::core::user::User;
use crate::shared::application::errors::RepositoryError;
use crate::shared::infrastructure::subscriptions::Subscription;
use async_trait::async_trait;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Fails with [`RepositoryError::InvalidCredentials`] on rejected credentials.
    async fn sign_in_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, RepositoryError>;

    async fn sign_up_with_email_password(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, RepositoryError>;

    async fn sign_in_with_google(&self) -> Result<User, RepositoryError>;

    /// May fail with [`RepositoryError::NotImplemented`].
    async fn sign_in_with_apple(&self) -> Result<User, RepositoryError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), RepositoryError>;

    async fn get_current_user(&self) -> Result<Option<User>, RepositoryError>;

    /// Succeeds when no session is active.
    async fn sign_out(&self) -> Result<(), RepositoryError>;

    /// Delivers the current session now and after every sign in or sign out.
    async fn on_auth_state_changed(&self) -> Subscription<Option<User>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Upsert keyed by id. The email index points at the latest owner.
    async fn save_user(&self, user: User) -> Result<User, RepositoryError>;

    async fn get_current_user(&self) -> Result<Option<User>, RepositoryError>;

    async fn sign_out(&self) -> Result<(), RepositoryError>;
}
