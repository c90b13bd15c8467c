use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::{Error, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const PORT_ENV: &str = "PORT";

/// Optional settings read from `catalog.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub graphiql: Option<bool>,
    pub client_dir: Option<PathBuf>,
}

/// Flags given to `catalog serve`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub client_dir: Option<PathBuf>,
    pub no_graphiql: bool,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub graphiql: bool,
    pub client_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            graphiql: true,
            client_dir: PathBuf::from("client"),
        }
    }
}

impl ServerSettings {
    /// Layer the config file and the `PORT` value over the defaults.
    ///
    /// `env_port` is the raw value of the `PORT` variable, if set. A blank
    /// value counts as unset.
    pub fn resolve(file: Option<&CatalogConfig>, env_port: Option<&str>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(file) = file {
            if let Some(host) = &file.host {
                settings.host = host.clone();
            }
            if let Some(port) = file.port {
                settings.port = port;
            }
            if let Some(graphiql) = file.graphiql {
                settings.graphiql = graphiql;
            }
            if let Some(dir) = &file.client_dir {
                settings.client_dir = dir.clone();
            }
        }

        if let Some(raw) = env_port.filter(|raw| !raw.trim().is_empty()) {
            settings.port = parse_port(raw)?;
        }

        Ok(settings)
    }

    /// Resolve using the process environment
    pub fn from_env(file: Option<&CatalogConfig>) -> Result<Self> {
        let env_port = std::env::var(PORT_ENV).ok();
        Self::resolve(file, env_port.as_deref())
    }

    /// Apply command-line flags, the highest-precedence layer
    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(dir) = overrides.client_dir {
            self.client_dir = dir;
        }
        if overrides.no_graphiql {
            self.graphiql = false;
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidPort(raw.to_string()))
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("catalog.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<CatalogConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: CatalogConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
