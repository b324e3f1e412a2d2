use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config::DbConfig;
use crate::users::repo::{PgUserRepo, UserRepo};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn UserRepo>,
}

impl AppState {
    /// Opens the pool, verifies it with a no-op round trip, and wraps it in
    /// the Postgres repository. Either failure is fatal for the process.
    pub async fn init(config: &DbConfig) -> anyhow::Result<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.dbname)
            .ssl_mode(PgSslMode::Disable);

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .context("connect to database")?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("database liveness check")?;

        Ok(Self::from_parts(Arc::new(PgUserRepo::new(pool))))
    }

    pub fn from_parts(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }
}
