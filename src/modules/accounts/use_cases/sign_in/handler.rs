use crate::modules::accounts::core::ports::{AuthRepository, UserRepository};
use crate::modules::accounts::core::user::User;
use crate::modules::accounts::use_cases::sign_in::command::SignIn;
use crate::modules::accounts::use_cases::user_mirror::refresh_user_mirror;
use crate::shared::application::errors::{ApplicationError, ValidationError};
use crate::shared::core::validation::is_blank;
use chrono::Utc;
use std::sync::Arc;

pub struct SignInHandler<TAuth, TUsers>
where
    TAuth: AuthRepository + 'static,
    TUsers: UserRepository + 'static,
{
    auth: Arc<TAuth>,
    users: Arc<TUsers>,
}

impl<TAuth, TUsers> SignInHandler<TAuth, TUsers>
where
    TAuth: AuthRepository + 'static,
    TUsers: UserRepository + 'static,
{
    pub fn new(auth: Arc<TAuth>, users: Arc<TUsers>) -> Self {
        Self { auth, users }
    }

    pub async fn handle(&self, command: SignIn) -> Result<User, ApplicationError> {
        let provider = command.provider();
        let user = match command {
            SignIn::EmailPassword { email, password } => {
                if is_blank(&email) || password.is_empty() {
                    return Err(ValidationError::MissingCredentials.into());
                }
                self.auth
                    .sign_in_with_email_password(email.trim(), &password)
                    .await?
            }
            SignIn::Google => self.auth.sign_in_with_google().await?,
            SignIn::Apple => self.auth.sign_in_with_apple().await?,
        };
        let user = refresh_user_mirror(&*self.users, user, Utc::now()).await?;
        tracing::info!(user_id = %user.id, ?provider, "user signed in");
        Ok(user)
    }
}
