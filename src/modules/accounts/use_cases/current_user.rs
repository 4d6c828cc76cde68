use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::core::user::User;
use crate::shared::application::errors::ApplicationError;

/// Resolves the signed-in user or fails with an authentication error.
pub async fn require_current_user<TUsers>(users: &TUsers) -> Result<User, ApplicationError>
where
    TUsers: UserRepository + ?Sized,
{
    users
        .get_current_user()
        .await?
        .ok_or_else(ApplicationError::unauthenticated)
}
