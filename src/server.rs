//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, default-user bootstrap, mount
//! construction and the Axum server lifecycle.

use crate::application::services::{
    AuthService, BootstrapService, PhysicalFeatureClassService, StationService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgPhysicalFeatureClassRepository, PgStationRepository, PgUserRepository,
};
use crate::infrastructure::security::{PasswordHasher, TokenService};
use crate::mounts::build_mounts;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes, in order:
/// - PostgreSQL pools for the auth store and the Climsoft schema
/// - Migrations for both
/// - The default user (a failure here aborts before binding)
/// - Enabled mounts
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The default user cannot be ensured
/// - An enabled upstream URL is unusable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let auth_pool = connect(&config, &config.auth_database_url)
        .await
        .context("Failed to connect to auth database")?;
    tracing::info!("Connected to auth database");

    let climsoft_pool = connect(&config, &config.climsoft_database_url)
        .await
        .context("Failed to connect to Climsoft database")?;
    tracing::info!("Connected to Climsoft database");

    // Both sets may share one database; each migrator ignores the other's versions.
    let mut auth_migrator = sqlx::migrate!("./migrations/auth");
    auth_migrator.set_ignore_missing(true);
    auth_migrator
        .run(&auth_pool)
        .await
        .context("Failed to migrate auth database")?;

    let mut climsoft_migrator = sqlx::migrate!("./migrations/climsoft");
    climsoft_migrator.set_ignore_missing(true);
    climsoft_migrator
        .run(&climsoft_pool)
        .await
        .context("Failed to migrate Climsoft database")?;
    tracing::info!("Migrations applied");

    let user_repository = Arc::new(PgUserRepository::new(Arc::new(auth_pool)));
    let climsoft_pool = Arc::new(climsoft_pool);
    let station_repository = Arc::new(PgStationRepository::new(climsoft_pool.clone()));
    let feature_class_repository =
        Arc::new(PgPhysicalFeatureClassRepository::new(climsoft_pool));

    let hasher = PasswordHasher::new(config.secret_key.as_bytes());
    let tokens = TokenService::new(&config.secret_key, config.access_token_expire_minutes);

    let bootstrap = BootstrapService::new(user_repository.clone(), hasher.clone());
    bootstrap
        .ensure_default_user(&config.default_user())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to ensure default user: {e}"))?;

    let state = AppState {
        auth_service: Arc::new(AuthService::new(user_repository, hasher, tokens)),
        station_service: Arc::new(StationService::new(station_repository.clone())),
        feature_class_service: Arc::new(PhysicalFeatureClassService::new(
            feature_class_repository,
            station_repository,
        )),
    };

    let mounts = build_mounts(&config.mount_settings(), &state)
        .context("Failed to build sub-application mounts")?;

    let app = app_router(state, &mounts, config.router_options());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn connect(config: &Config, url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
