//! Configuration loader.
//!
//! The config file is TOML with two sections:
//!
//! ```toml
//! [db]
//! database = "data/personas.db"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//! ```
//!
//! [`load_section`] returns one section as plain strings; [`AppConfig`] is the
//! typed view used by the server.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("config section [{0}] not found")]
    MissingSection(String),
    #[error("config key {section}.{key} not found")]
    MissingKey { section: String, key: String },
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Read `[section]` from the TOML file at `path` as option → string pairs.
///
/// Scalars are stringified (`port = 5000` yields `"5000"`); nested tables and
/// arrays are skipped.
pub fn load_section(
    path: impl AsRef<Path>,
    section: &str,
) -> Result<HashMap<String, String>, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    section_from_str(&content, section).map_err(|e| match e {
        ConfigError::Parse { message, .. } => {
            ConfigError::Parse { path: path.to_path_buf(), message }
        }
        other => other,
    })
}

fn section_from_str(content: &str, section: &str) -> Result<HashMap<String, String>, ConfigError> {
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: PathBuf::new(),
        message: e.message().to_string(),
    })?;
    let Some(toml::Value::Table(values)) = table.get(section) else {
        return Err(ConfigError::MissingSection(section.to_string()));
    };
    let options = values
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => return None,
            };
            Some((key.clone(), text))
        })
        .collect();
    Ok(options)
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Filesystem path of the SQLite file, or `:memory:`.
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub worker_threads: Option<usize>,
}

pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    AppConfig::load_from_file(path)
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let db = load_section(path, "db")?;
        let server = load_section(path, "server")?;
        Self::from_sections(&db, &server)
    }

    pub fn load_and_validate() -> Result<Self, ConfigError> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_sections(
        db: &HashMap<String, String>,
        server: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let database = required(db, "db", "database")?;
        let host = required(server, "server", "host")?;
        let port = required(server, "server", "port")?;
        let port = port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
            key: "server.port".into(),
            message: format!("{port:?}: {e}"),
        })?;
        let worker_threads = match server.get("worker_threads") {
            Some(raw) => Some(raw.trim().parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                key: "server.worker_threads".into(),
                message: format!("{raw:?}: {e}"),
            })?),
            None => None,
        };
        Ok(Self {
            db: DbConfig { database },
            server: ServerConfig { host, port, worker_threads },
        })
    }

    pub fn normalize_and_validate(&mut self) -> Result<(), ConfigError> {
        // 归一化 server
        self.server.normalize()?;
        // 校验 database 路径
        self.db.validate()?;
        Ok(())
    }
}

fn required(
    section: &HashMap<String, String>,
    name: &str,
    key: &str,
) -> Result<String, ConfigError> {
    section.get(key).cloned().ok_or_else(|| ConfigError::MissingKey {
        section: name.to_string(),
        key: key.to_string(),
    })
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.port".into(),
                message: "must be in 1..=65535".into(),
            });
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DbConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "db.database".into(),
                message: "database path is empty".into(),
            });
        }
        Ok(())
    }

    /// Connection URL understood by sea-orm's SQLite driver.
    pub fn url(&self) -> String {
        if self.database == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite://{}?mode=rwc", self.database)
        }
    }
}
