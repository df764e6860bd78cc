use serde::Serialize;
use std::{env, fmt, time::Duration};
use thiserror::Error;
use tracing::info;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const LOCAL_API_BASE: &str = "http://localhost:5000";
const DEPLOYED_API_BASE: &str = "https://your-heroku-app.herokuapp.com";

/// Whether failures are shown as-is (developer machine) or replaced by
/// synthesized demo results (deployed page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Local,
    Demo,
}

impl Mode {
    pub fn from_host(host: &str) -> Self {
        let host = host.trim();
        let host = host.split(':').next().unwrap_or(host);
        if host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" {
            Mode::Local
        } else {
            Mode::Demo
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Demo => "demo",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mode: Mode,
    pub api_base: String,
    pub request_timeout: Duration,
    pub demo_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => parse("PORT", value)?,
            None => DEFAULT_PORT,
        };

        let mode = match lookup("APP_MODE") {
            Some(value) => parse_mode(value)?,
            None => {
                let host = lookup("PUBLIC_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
                let mode = Mode::from_host(&host);
                info!("APP_MODE not set, derived {mode} mode from host {host}");
                mode
            }
        };

        let api_base = match lookup("API_BASE") {
            Some(value) if !value.trim().is_empty() => value.trim().trim_end_matches('/').to_string(),
            _ => {
                let base = match mode {
                    Mode::Local => LOCAL_API_BASE,
                    Mode::Demo => DEPLOYED_API_BASE,
                };
                info!("API_BASE not set, using default: {base}");
                base.to_string()
            }
        };

        let timeout_secs = match lookup("API_TIMEOUT_SECS") {
            Some(value) => parse("API_TIMEOUT_SECS", value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let demo_seed = lookup("DEMO_SEED")
            .map(|value| parse("DEMO_SEED", value))
            .transpose()?;

        Ok(Self {
            port,
            mode,
            api_base,
            request_timeout: Duration::from_secs(timeout_secs),
            demo_seed,
        })
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
        value,
    })
}

fn parse_mode(value: String) -> Result<Mode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "local" => Ok(Mode::Local),
        "demo" | "deployed" => Ok(Mode::Demo),
        _ => Err(ConfigError::Invalid {
            key: "APP_MODE",
            value,
            reason: "expected 'local' or 'demo'".to_string(),
        }),
    }
}
