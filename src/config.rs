use std::env::VarError;

use anyhow::anyhow;

pub const REQUIRED_VARIABLES: [&str; 2] = ["SQLITE_URL", "LISTEN_PORT"];

pub struct Config {
    pub sqlite_url: String,
    pub listen_port: u16,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let sqlite_url = env("SQLITE_URL")?;

        let listen_port = env("LISTEN_PORT")?
            .parse()
            .map_err(|e| anyhow!("LISTEN_PORT is not a valid port number: {e}"))?;

        Ok(Self {
            sqlite_url,
            listen_port,
        })
    }

    pub fn log(&self) {
        log::info!("SQLITE_URL = {}", self.sqlite_url);
        log::info!("LISTEN_PORT = {}", self.listen_port);
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}
