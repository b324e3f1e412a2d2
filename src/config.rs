use anyhow::Context;

/// Connection parameters for the users database, read from the environment.
/// Every field is required; `main` aborts before binding a listener if any
/// is missing or malformed.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl DbConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = require("DB_HOST")?;
        let port = require("DB_PORT")?
            .parse::<u16>()
            .context("DB_PORT must be a positive integer")?;
        anyhow::ensure!(port > 0, "DB_PORT must be a positive integer");
        let user = require("DB_USER")?;
        let dbname = require("DB_NAME")?;
        let password = require("DB_PASSWORD")?;

        Ok(Self {
            host,
            port,
            user,
            password,
            dbname,
        })
    }
}

fn require(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("missing required environment variable {key}"))
}
