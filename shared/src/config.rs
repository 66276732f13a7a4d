use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use anyhow::{Context, Result};

pub const DEFAULT_SESSION_STORE_PATH: &str = "./.weg-portal/preferences.json";

pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            host: read_or("HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            port: read_or("PORT", 8080)?,
        };
        let session = SessionConfig {
            store_path: std::env::var("SESSION_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_STORE_PATH)),
        };
        Ok(Self { server, session })
    }
}

pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub struct SessionConfig {
    /// File holding the persisted role preference.
    pub store_path: PathBuf,
}

fn read_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_falls_back_to_default() {
        let port: u16 = read_or("WEG_PORTAL_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn socket_addr_joins_host_and_port() {
        let cfg = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        };
        assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
