use std::env;

use thiserror::Error;

use crate::services::payment::simulator::DEFAULT_APPROVAL_THRESHOLD;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const CORS_ALLOWED_ORIGINS: &str = "http://localhost:4200";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub approval_threshold: f64,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
            cors_allowed_origins: split_origins(CORS_ALLOWED_ORIGINS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "port number",
                value,
            })?,
            None => defaults.port,
        };

        let approval_threshold = match lookup("APPROVAL_THRESHOLD") {
            Some(value) => {
                let parsed = value.trim().parse::<f64>();
                match parsed {
                    Ok(threshold) if threshold.is_finite() && threshold >= 0.0 => threshold,
                    _ => {
                        return Err(ConfigError::Invalid {
                            name: "APPROVAL_THRESHOLD",
                            expected: "non-negative amount",
                            value,
                        })
                    }
                }
            }
            None => defaults.approval_threshold,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|value| split_origins(&value))
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            host,
            port,
            approval_threshold,
            cors_allowed_origins,
        })
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
