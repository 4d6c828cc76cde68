// Keeps the user directory in step with the authentication provider after a sign in.

use crate::modules::accounts::core::ports::UserRepository;
use crate::modules::accounts::core::user::User;
use crate::shared::application::errors::ApplicationError;
use chrono::{DateTime, Utc};

/// Upserts `user` with `last_login_at` set to `now`. An already mirrored user keeps its
/// original `created_at`.
pub async fn refresh_user_mirror<TUsers>(
    users: &TUsers,
    user: User,
    now: DateTime<Utc>,
) -> Result<User, ApplicationError>
where
    TUsers: UserRepository + ?Sized,
{
    let created_at = users
        .get_user_by_id(&user.id)
        .await?
        .map(|mirrored| mirrored.created_at)
        .unwrap_or(user.created_at);
    let saved = users
        .save_user(User {
            created_at,
            last_login_at: now,
            ..user
        })
        .await?;
    Ok(saved)
}
