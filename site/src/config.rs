use std::path::PathBuf;

use anyhow::{Context, Result};

pub const HOST_VAR: &str = "SITE_HOST";
pub const PORT_VAR: &str = "SITE_PORT";
pub const DIST_VAR: &str = "SITE_DIST_DIR";
pub const ASSETS_VAR: &str = "SITE_ASSETS_DIR";

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output (`index.html` + wasm bundle)
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            dist_dir: PathBuf::from("../dist"),
            assets_dir: PathBuf::from("../assets"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(host) = get(HOST_VAR) {
            cfg.host = host;
        }
        if let Some(port) = get(PORT_VAR) {
            cfg.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} must be a port number, got {port:?}"))?;
        }
        if let Some(dir) = get(DIST_VAR) {
            cfg.dist_dir = dir.into();
        }
        if let Some(dir) = get(ASSETS_VAR) {
            cfg.assets_dir = dir.into();
        }

        Ok(cfg)
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
