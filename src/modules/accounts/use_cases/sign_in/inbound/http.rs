use axum::{
    Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::accounts::core::user::AuthProvider;
use crate::modules::accounts::use_cases::sign_in::command::SignIn;
use crate::shell::http::rejected;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignInBody {
    #[serde(default = "email_provider")]
    pub provider: AuthProvider,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn email_provider() -> AuthProvider {
    AuthProvider::Email
}

impl From<SignInBody> for SignIn {
    fn from(body: SignInBody) -> Self {
        match body.provider {
            AuthProvider::Email => SignIn::EmailPassword {
                email: body.email,
                password: body.password,
            },
            AuthProvider::Google => SignIn::Google,
            AuthProvider::Apple => SignIn::Apple,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignInBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    match state.sign_in.handle(body.into()).await {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}
