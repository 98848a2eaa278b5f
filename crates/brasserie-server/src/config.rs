//! Runtime configuration.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults (`0.0.0.0:4000`, `./database.sqlite`)
//! 2. an optional TOML file
//! 3. `BRASSERIE_*` environment variables (`BRASSERIE_PORT`,
//!    `BRASSERIE_DATABASE_PATH`, ...)
//! 4. the bare `PORT` and `TEST_DATABASE` variables older deployments set

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DATABASE_PATH: &str = "./database.sqlite";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Layer all configuration sources. `env` stands in for the process
  /// environment so callers (and tests) control what is visible.
  pub fn load(file: Option<&Path>, env: &Map<String, String>) -> Result<Self, ConfigError> {
    let mut builder = Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("database_path", DEFAULT_DATABASE_PATH)?;

    if let Some(path) = file {
      builder = builder.add_source(File::from(path).required(false));
    }

    builder
      .add_source(Environment::with_prefix("BRASSERIE").source(Some(env.clone())))
      .set_override_option("port", env.get("PORT").cloned())?
      .set_override_option("database_path", env.get("TEST_DATABASE").cloned())?
      .build()?
      .try_deserialize()
  }

  /// `host:port`, ready for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
