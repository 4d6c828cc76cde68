// Local checks run before the authentication provider is contacted.

use crate::modules::accounts::use_cases::sign_up::command::SignUp;
use crate::shared::application::errors::ValidationError;
use crate::shared::core::validation::{ensure_email, ensure_password, is_blank};

pub fn validate_sign_up(command: &SignUp) -> Result<(), ValidationError> {
    if is_blank(&command.email) || command.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if is_blank(&command.display_name) {
        return Err(ValidationError::MissingDisplayName);
    }
    ensure_email(command.email.trim())?;
    ensure_password(&command.password)
}
