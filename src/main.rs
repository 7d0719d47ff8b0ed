use anyhow::Result;
use quill_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, Repositories},
};
use quill_core::config::AppConfig;
use quill_core::infrastructure::{
    database::{self, PoolSettings},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCommentRepository,
        PostgresFavoriteRepository, PostgresFollowRepository, PostgresTagRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use quill_core::presentation::http::{routes::build_router, state::HttpState};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        tags: Arc::new(PostgresTagRepository::new(pool.clone())),
        favorites: Arc::new(PostgresFavoriteRepository::new(pool.clone())),
        follows: Arc::new(PostgresFollowRepository::new(pool.clone())),
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(
        config.database_url(),
        PoolSettings {
            max_connections: config.db_max_connections(),
            min_connections: config.db_min_connections(),
        },
    )
    .await?;
    database::run_migrations(&pool).await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repositories(&pool),
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    let state = HttpState::new(services, config.request_timeout());
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
