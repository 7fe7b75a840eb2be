use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Missing is not fatal here; requests that need the store fail instead.
    pub database_url: Option<String>,
}

impl Config {
    /// Reads `BIND_ADDR` and `DATABASE_URL`, after loading `.env` if there is one.
    pub fn from_env() -> anyhow::Result<Config> {
        let _ = dotenv::dotenv();

        let bind_addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR {bind_addr:?} is not a socket address"))?;

        let database_url = dotenv::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        Ok(Config { bind_addr, database_url })
    }
}
