use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::infra::identity::FixedIdentityProvider;
use crate::infra::repositories::{
    sqlite_booking_repo::SqliteBookingRepo, sqlite_coupon_repo::SqliteCouponRepo,
    sqlite_event_repo::SqliteEventRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    AppState {
        config: config.clone(),
        event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
        booking_repo: Arc::new(SqliteBookingRepo::new(
            pool.clone(),
            config.payment_gateway_url.clone(),
            config.currency.clone(),
        )),
        coupon_repo: Arc::new(SqliteCouponRepo::new(pool)),
        identity: Arc::new(FixedIdentityProvider::signed_out()),
    }
}

pub async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
