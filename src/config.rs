use std::env;

use anyhow::Context;

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/starwars.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_port(env::var("APP_PORT").or_else(|_| env::var("PORT")).ok())?;
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

/// An unset port means the default; a set but unparsable one is an error.
fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("invalid APP_PORT/PORT value {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}
