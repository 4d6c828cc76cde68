// Asks the authentication provider to email a password reset link.

use crate::modules::accounts::core::ports::AuthRepository;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::validation::ensure_email;
use std::sync::Arc;

pub struct RequestPasswordResetHandler<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    auth: Arc<TAuth>,
}

impl<TAuth> RequestPasswordResetHandler<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    pub fn new(auth: Arc<TAuth>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, email: &str) -> Result<(), ApplicationError> {
        let email = email.trim();
        ensure_email(email)?;
        self.auth.send_password_reset(email).await?;
        Ok(())
    }
}
