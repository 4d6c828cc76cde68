// Error taxonomy shared by every use case.
//
// Responsibilities
// - RepositoryError is what ports report. Adapters never return ApplicationError.
// - ValidationError is produced by pure decide functions before any collaborator is called.
// - ApplicationError is what handlers return to inbound adapters.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("end date must not be before start date")]
    InvalidInterval,

    #[error("range end must not be before range start")]
    InvalidRange,

    #[error("email and password are required")]
    MissingCredentials,

    #[error("display name is required")]
    MissingDisplayName,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("cannot schedule a notification in the past")]
    NotificationInPast,

    #[error("device token is required")]
    MissingDeviceToken,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("not authenticated: {0}")]
    Authentication(String),

    #[error("not authorized: {0}")]
    Authorization(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("collaborator failed: {0}")]
    Collaborator(String),
}

impl ApplicationError {
    pub fn unauthenticated() -> Self {
        Self::Authentication("user not authenticated".into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { entity, id } => Self::NotFound { entity, id },
            RepositoryError::InvalidCredentials(message) => Self::Authentication(message),
            RepositoryError::NotImplemented(message) => Self::NotImplemented(message),
            RepositoryError::Backend(message) => Self::Collaborator(message),
        }
    }
}
