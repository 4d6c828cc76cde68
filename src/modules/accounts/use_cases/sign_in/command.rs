use crate::modules::accounts::core::user::AuthProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignIn {
    EmailPassword { email: String, password: String },
    Google,
    Apple,
}

impl SignIn {
    pub fn provider(&self) -> AuthProvider {
        match self {
            SignIn::EmailPassword { .. } => AuthProvider::Email,
            SignIn::Google => AuthProvider::Google,
            SignIn::Apple => AuthProvider::Apple,
        }
    }
}
