// Ends the current session. Signing out without a session is not an error.

use crate::modules::accounts::core::ports::AuthRepository;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct SignOutHandler<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    auth: Arc<TAuth>,
}

impl<TAuth> SignOutHandler<TAuth>
where
    TAuth: AuthRepository + 'static,
{
    pub fn new(auth: Arc<TAuth>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self) -> Result<(), ApplicationError> {
        self.auth.sign_out().await?;
        tracing::info!("user signed out");
        Ok(())
    }
}
