use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

use anyhow::{Context, anyhow, ensure};
use tracing::info;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const PORT: &str = "PORT";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const SESSION_IDLE_MINUTES: &str = "SESSION_IDLE_MINUTES";

/// Sessions may idle between one minute and one year.
pub const SESSION_IDLE_RANGE: RangeInclusive<i64> = 1..=525_600;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub session_idle_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://clubs.db".to_owned(),
            port: 8080,
            db_max_connections: 16,
            session_idle_minutes: 5,
        }
    }
}

impl Config {
    /// Reads the process environment (and `.env`, if the caller loaded it).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();

        let session_idle_minutes =
            load(&lookup, SESSION_IDLE_MINUTES, defaults.session_idle_minutes)?;
        ensure!(
            SESSION_IDLE_RANGE.contains(&session_idle_minutes),
            "invalid {SESSION_IDLE_MINUTES} value {session_idle_minutes}: outside {:?}",
            SESSION_IDLE_RANGE,
        );

        Ok(Self {
            database_url: load(&lookup, DATABASE_URL, defaults.database_url)?,
            port: load(&lookup, PORT, defaults.port)?,
            db_max_connections: load(&lookup, DB_MAX_CONNECTIONS, defaults.db_max_connections)?,
            session_idle_minutes,
        })
    }
}

fn load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    raw.trim()
        .parse()
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("invalid {key} value {raw:?}"))
}
