use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub mock: MockConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    /// Extra delay added to every API response.
    #[serde(default)]
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    pub dist_dir: String,
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}: {}", addr, e))
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.mock.latency_ms)
    }

    pub fn dist_dir(&self) -> PathBuf {
        PathBuf::from(&self.frontend.dist_dir)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[mock]
latency_ms = 0

[frontend]
dist_dir = "crates/frontend/dist"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Loads the configuration once and returns the process-wide copy.
pub fn get() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.mock.latency_ms, 0);
        assert_eq!(config.frontend.dist_dir, "crates/frontend/dist");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_latency_defaults_to_zero_when_omitted() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            [mock]
            [frontend]
            dist_dir = "dist"
            "#,
        )
        .unwrap();
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }
}
