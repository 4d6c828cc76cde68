use crate::modules::accounts::core::ports::{AuthRepository, UserRepository};
use crate::modules::accounts::core::user::User;
use crate::modules::accounts::use_cases::sign_up::command::SignUp;
use crate::modules::accounts::use_cases::sign_up::decide::validate_sign_up;
use crate::modules::accounts::use_cases::user_mirror::refresh_user_mirror;
use crate::shared::application::errors::ApplicationError;
use chrono::Utc;
use std::sync::Arc;

pub struct SignUpHandler<TAuth, TUsers>
where
    TAuth: AuthRepository + 'static,
    TUsers: UserRepository + 'static,
{
    auth: Arc<TAuth>,
    users: Arc<TUsers>,
}

impl<TAuth, TUsers> SignUpHandler<TAuth, TUsers>
where
    TAuth: AuthRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(auth: Arc<TAuth>, users: Arc<TUsers>) -> Self {
        Self { auth, users }
    }

    pub async fn handle(&self, command: SignUp) -> Result<User, ApplicationError> {
        validate_sign_up(&command)?;
        let user = self
            .auth
            .sign_up_with_email_password(
                command.email.trim(),
                &command.password,
                command.display_name.trim(),
            )
            .await?;
        let user = refresh_user_mirror(&*self.users, user, Utc::now()).await?;
        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user)
    }
}
