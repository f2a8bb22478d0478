use std::num::ParseIntError;

use strum_macros::{Display, EnumString};
use thiserror::Error;

mod env;

pub use env::Env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime environment profile, selecting the log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

/// Errors while reading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    #[error("unknown APP_ENV value {value:?} (expected development or production)")]
    UnknownEnvironment { value: String },
}

/// Server configuration, read from `HOST`, `PORT` and `APP_ENV`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub env: AppEnv,
}

impl ServerConfig {
    /// Read configuration, falling back to `0.0.0.0:3000` in development.
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        let host = env.var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env.var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };

        let app_env = match env.var("APP_ENV") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::UnknownEnvironment { value })?,
            Err(_) => AppEnv::default(),
        };

        Ok(Self {
            host,
            port,
            env: app_env,
        })
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
