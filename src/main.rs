use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use shard_calendar::modules::accounts::adapters::outbound::auth_provider_in_memory::InMemoryAuthProvider;
use shard_calendar::modules::accounts::adapters::outbound::session_cache::FileSessionCache;
use shard_calendar::modules::accounts::adapters::outbound::user_directory_in_memory::InMemoryUserDirectory;
use shard_calendar::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use shard_calendar::modules::notifications::adapters::outbound::notification_scheduler_in_memory::InMemoryNotificationScheduler;
use shard_calendar::shell::config::Config;
use shard_calendar::shell::graphql::{AppSchema, build_schema};
use shard_calendar::shell::http::router;
use shard_calendar::shell::state::AppState;
use shard_calendar::shell::workers::spawn_session_cache_worker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let auth = Arc::new(InMemoryAuthProvider::new());
    let users = Arc::new(InMemoryUserDirectory::new(auth.clone()));
    let events = Arc::new(InMemoryEventRepository::new());
    let notifications = Arc::new(InMemoryNotificationScheduler::new(
        config.notifications_granted,
    ));

    let session_cache = FileSessionCache::new(&config.session_cache_path);
    if let Some(cached) = session_cache.load().await {
        tracing::info!(user_id = %cached.uid, "found cached session from a previous run");
    }
    let _session_cache_worker = spawn_session_cache_worker(auth.clone(), session_cache).await;

    let state = AppState::new(
        auth,
        users,
        events,
        notifications,
        config.notify_minutes_before,
    );
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
