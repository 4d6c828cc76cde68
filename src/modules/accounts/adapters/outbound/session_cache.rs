// Local persistence of the signed-in user.
//
// Purpose
// - Let a restarted client show who was signed in before the provider answers.
//
// Boundaries
// - Best effort. Every failure is logged and swallowed; callers never see an error.

use crate::modules::accounts::core::user::User;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Only the fields needed to render the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedSession {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

impl From<&User> for CachedSession {
    fn from(user: &User) -> Self {
        Self {
            uid: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            photo_url: user.photo_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSessionCache {
    path: PathBuf,
}

impl FileSessionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn save(&self, user: &User) {
        let body = match serde_json::to_vec_pretty(&CachedSession::from(user)) {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(%error, "failed to encode cached session");
                return;
            }
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(error) = tokio::fs::create_dir_all(parent).await
        {
            tracing::warn!(%error, path = %parent.display(), "failed to create session cache directory");
            return;
        }
        if let Err(error) = tokio::fs::write(&self.path, body).await {
            tracing::warn!(%error, path = %self.path.display(), "failed to write cached session");
        }
    }

    pub async fn load(&self) -> Option<CachedSession> {
        let body = match tokio::fs::read(&self.path).await {
            Ok(body) => body,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "failed to read cached session");
                return None;
            }
        };
        match serde_json::from_slice(&body) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "discarding unreadable cached session");
                None
            }
        }
    }

    pub async fn clear(&self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "failed to remove cached session");
            }
        }
    }
}
