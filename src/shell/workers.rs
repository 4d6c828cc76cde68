// Background workers owned by the composition root.
//
// Responsibilities
// - Keep the local session cache in step with the authentication state.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::modules::accounts::adapters::outbound::session_cache::FileSessionCache;
use crate::modules::accounts::core::ports::AuthRepository;

/// Writes the session cache on every sign in and removes it on sign out.
/// Runs until the authentication provider drops the subscription.
pub async fn spawn_session_cache_worker<TAuth>(
    auth: Arc<TAuth>,
    cache: FileSessionCache,
) -> JoinHandle<()>
where
    TAuth: AuthRepository + 'static,
{
    let mut changes = auth.on_auth_state_changed().await;
    tokio::spawn(async move {
        while let Some(session) = changes.recv().await {
            match session {
                Some(user) => {
                    cache.save(&user).await;
                    tracing::debug!(user_id = %user.id, path = %cache.path().display(), "session cached");
                }
                None => {
                    cache.clear().await;
                    tracing::debug!(path = %cache.path().display(), "session cache cleared");
                }
            }
        }
        tracing::info!("session cache worker stopped");
    })
}

#[cfg(test)]
mod session_cache_worker_tests {
    use super::*;
    use crate::modules::accounts::adapters::outbound::auth_provider_in_memory::InMemoryAuthProvider;
    use crate::modules::accounts::adapters::outbound::session_cache::CachedSession;
    use crate::tests::fixtures::users::UserBuilder;
    use rstest::rstest;
    use std::time::Duration;
    use uuid::Uuid;

    async fn wait_for_cache(cache: &FileSessionCache, expected: Option<CachedSession>) -> bool {
        for _ in 0..100 {
            if cache.load().await == expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_follow_sign_in_and_sign_out() {
        let auth = Arc::new(InMemoryAuthProvider::new());
        let path = std::env::temp_dir()
            .join(format!("shard-calendar-worker-{}", Uuid::now_v7()))
            .join("session.json");
        let cache = FileSessionCache::new(&path);
        let _worker = spawn_session_cache_worker(auth.clone(), cache.clone()).await;

        let user = auth.open_session(UserBuilder::new().build()).await;
        assert!(wait_for_cache(&cache, Some(CachedSession::from(&user))).await);

        auth.sign_out().await.unwrap();
        assert!(wait_for_cache(&cache, None).await);
    }
}
