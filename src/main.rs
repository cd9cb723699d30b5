//! Round Table service binary.
//!
//! Wires configuration, the optional Postgres/Redis/OpenAI backends, and
//! the HTTP router, then serves. Every backend is optional: a bare start
//! serves the built-in characters with deterministic fallback replies and
//! no persistence.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use round_table::adapters::ai::{OpenAIConfig, OpenAIProvider};
use round_table::adapters::http::{api_router, ConversationAppState};
use round_table::adapters::postgres::{PostgresCharacterStore, PostgresConversationStore};
use round_table::adapters::redis::RedisConversationCache;
use round_table::application::{CharacterResolver, ConversationFlow, ResponseGenerator};
use round_table::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let mut resolver = CharacterResolver::new();
    let mut generator = ResponseGenerator::new();
    let mut flow_backends: (
        Option<Arc<PostgresConversationStore>>,
        Option<Arc<RedisConversationCache>>,
    ) = (None, None);

    if let Some(db) = &config.database {
        let pool = PgPoolOptions::new()
            .min_connections(db.min_connections)
            .max_connections(db.max_connections)
            .acquire_timeout(db.acquire_timeout())
            .connect(&db.url)
            .await?;

        if db.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("database migrations applied");
        }

        resolver = resolver.with_store(Arc::new(PostgresCharacterStore::new(pool.clone())));
        flow_backends.0 = Some(Arc::new(PostgresConversationStore::new(pool)));
        info!("postgres connected");
    } else {
        warn!("no database configured, serving built-in characters without durable storage");
    }

    if let Some(redis_config) = &config.redis {
        let client = redis::Client::open(redis_config.url.as_str())?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        flow_backends.1 = Some(Arc::new(RedisConversationCache::new(conn)));
        info!("redis connected");
    } else {
        warn!("no redis configured, conversation caching disabled");
    }

    if config.ai.has_openai() {
        let key = config
            .ai
            .openai_api_key
            .clone()
            .unwrap_or_default();
        let provider = OpenAIProvider::new(
            OpenAIConfig::new(key)
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout()),
        );
        generator = generator.with_provider(Arc::new(provider));
        info!("openai provider configured");
    } else {
        warn!("no openai api key configured, characters will use fallback replies");
    }

    let mut flow = ConversationFlow::new(resolver, generator);
    if let Some(store) = flow_backends.0 {
        flow = flow.with_store(store);
    }
    if let Some(cache) = flow_backends.1 {
        flow = flow.with_cache(cache);
    }
    if let Some(redis_config) = &config.redis {
        flow = flow.with_cache_ttl(redis_config.cache_ttl());
    }

    let state = ConversationAppState::new(Arc::new(flow));

    let cors = match config.server.cors_origins_list().as_slice() {
        [] => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origins => {
            let origins = origins
                .iter()
                .map(|o| o.parse())
                .collect::<Result<Vec<http::HeaderValue>, _>>()?;
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!(%addr, "round table listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}
