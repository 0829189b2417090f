//! Environment configuration
//!
//! Values are read from the process environment after loading an optional
//! `.env` file.

use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_AGGREGATION_CONCURRENCY: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub http: HttpSettings,
    pub elastic: ElasticSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub env: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub port: u16,
    pub cors: CorsSettings,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .into_iter()
                .map(String::from)
                .collect(),
            allow_headers: ["Content-Type", "Authorization"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElasticSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl ElasticSettings {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// Maximum number of per-person aggregation queries in flight during bulk listings
    pub aggregation_concurrency: usize,
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let request_timeout_secs = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let aggregation_concurrency = parse_or(
            &lookup,
            "AGGREGATION_CONCURRENCY",
            DEFAULT_AGGREGATION_CONCURRENCY,
        )?;
        if aggregation_concurrency == 0 {
            return Err(ConfigError::Invalid {
                key: "AGGREGATION_CONCURRENCY",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            app: AppSettings {
                env: required("APP_ENV")?,
            },
            http: HttpSettings {
                port: parse_port("HTTP_PORT", required("HTTP_PORT")?)?,
                cors: CorsSettings::default(),
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
            elastic: ElasticSettings {
                host: required("ELASTIC_HOST")?,
                port: parse_port("ELASTIC_PORT", required("ELASTIC_PORT")?)?,
                user: required("ELASTIC_USER")?,
                password: lookup("ELASTIC_PASSWORD").unwrap_or_default(),
            },
            catalog: CatalogSettings {
                aggregation_concurrency,
            },
        })
    }
}

fn parse_port(key: &'static str, value: String) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| {
        ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
