use crate::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 60;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// How far ahead of a training's start the reminder pass looks.
    pub reminder_lead_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_var("PORT", DEFAULT_PORT)?,
            reminder_lead_minutes: parse_env_var(
                "REMINDER_LEAD_MINUTES",
                DEFAULT_REMINDER_LEAD_MINUTES,
            )?,
        })
    }
}

/// Reads a numeric environment variable, falling back to a default when the
/// variable is unset and rejecting values that do not parse.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| {
            AppError::ConfigErr(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        }),
        Err(_) => Ok(default),
    }
}
