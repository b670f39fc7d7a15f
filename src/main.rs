//!
//! Chikukwa bus booking REST service.
//! Reads configuration from TOML file (~/.config/chikukwa-bus/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use chikukwa_bus::application::{BookingService, StatsService};
use chikukwa_bus::auth::{AdminGate, CredentialGate};
use chikukwa_bus::config::AppConfig;
use chikukwa_bus::domain::catalog::defaults::{default_routes, default_stops};
use chikukwa_bus::domain::{BookingStore, RouteCatalog};
use chikukwa_bus::infrastructure::database::migrator::Migrator;
use chikukwa_bus::infrastructure::database::repositories::{
    SeaOrmBookingStore, SeaOrmRouteCatalog,
};
use chikukwa_bus::infrastructure::database::seed::seed_default_catalog;
use chikukwa_bus::infrastructure::{
    InMemoryBookingStore, InMemoryRouteCatalog, ResilientBookingStore,
};
use chikukwa_bus::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CHIKUKWA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting {} booking service...", app_cfg.company.name);

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("Prometheus metrics recorder installed");

    // ── Storage: durable backend with in-memory fallback ───────
    // A reachable database gets the resilient store (retry once, then
    // degrade per request). An unreachable one drops the whole process
    // into the in-memory backend rather than refusing to serve.
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };

    let fallback = Arc::new(InMemoryBookingStore::new());

    let (store, catalog, db): (
        Arc<dyn BookingStore>,
        Arc<dyn RouteCatalog>,
        Option<sea_orm::DatabaseConnection>,
    ) = match init_database(&db_config).await {
        Ok(db) => {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");

            seed_default_catalog(&db, app_cfg.booking.total_seats).await?;

            let primary = Arc::new(SeaOrmBookingStore::new(db.clone()));
            let store = Arc::new(ResilientBookingStore::new(primary, fallback));
            let catalog = Arc::new(SeaOrmRouteCatalog::new(db.clone()));
            (store, catalog, Some(db))
        }
        Err(e) => {
            warn!(
                "Database unavailable ({}), falling back to in-memory storage. \
                 Bookings will not survive a restart.",
                e
            );
            let catalog = Arc::new(InMemoryRouteCatalog::new(
                default_routes(),
                default_stops(),
                app_cfg.booking.total_seats,
            ));
            (fallback, catalog, None)
        }
    };

    // ── Services ───────────────────────────────────────────────
    let booking = Arc::new(BookingService::new(catalog.clone(), store.clone()));
    let stats = Arc::new(StatsService::new(store));
    let gate: Arc<dyn CredentialGate> = Arc::new(AdminGate::from_accounts(&app_cfg.admin.accounts)?);
    info!(
        "Operator gate configured with {} account(s)",
        app_cfg.admin.accounts.len()
    );

    // ── REST API ───────────────────────────────────────────────
    let router = create_api_router(
        booking,
        stats,
        catalog,
        gate,
        app_cfg.company.clone(),
        prometheus_handle,
    );

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    // ── Cleanup ────────────────────────────────────────────────
    if let Some(db) = db {
        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
