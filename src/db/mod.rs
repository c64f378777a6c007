use std::str::FromStr;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use crate::config::Config;

/// Database handle opened at startup and closed at shutdown.
///
/// No handler reads or writes through it today. It is held so persisted
/// content can be added later without touching the process lifecycle.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
    name: String,
}

impl Database {
    /// Build the pool without connecting; the first query would open the socket.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let options = connect_options(config)?;
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(options);

        info!(database = %config.db_name, "Database handle ready (lazy connect)");

        Ok(Self {
            pool,
            name: config.db_name.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!(database = %self.name, "Database handle closed");
    }
}

fn connect_options(config: &Config) -> anyhow::Result<PgConnectOptions> {
    Ok(PgConnectOptions::from_str(&config.database_url)
        .context("DATABASE_URL is not a valid connection string")?
        .database(&config.db_name))
}
