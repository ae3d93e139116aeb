use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use super::logging::LogFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(anyhow!(
                "unknown environment '{other}', expecting development or production"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub http_host: String,
    pub port: u16,
    pub port_max_attempts: u16,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            http_host: "0.0.0.0".to_string(),
            port: 3000,
            port_max_attempts: 10,
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            http_request_body_limit_bytes: 100 * 1024,
            http_concurrency_limit: 256,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let environment = match std::env::var("APP_ENV") {
            Ok(raw) => raw.parse().context("Failed to parse APP_ENV")?,
            Err(_) => defaults.environment,
        };
        let http_host = std::env::var("HTTP_HOST").unwrap_or(defaults.http_host);
        let port = parse_positive_env("PORT", defaults.port)?;
        let port_max_attempts = parse_positive_env("PORT_MAX_ATTEMPTS", defaults.port_max_attempts)?;
        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => parse_cors_origins(&raw),
            Err(_) => defaults.cors_origins,
        };
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(defaults.log_level);
        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse().context("Failed to parse LOG_FORMAT")?,
            Err(_) => defaults.log_format,
        };
        let http_request_body_limit_bytes = parse_positive_env(
            "HTTP_REQUEST_BODY_LIMIT_BYTES",
            defaults.http_request_body_limit_bytes,
        )?;
        let http_concurrency_limit =
            parse_positive_env("HTTP_CONCURRENCY_LIMIT", defaults.http_concurrency_limit)?;

        Ok(Self {
            environment,
            http_host,
            port,
            port_max_attempts,
            cors_origins,
            log_level,
            log_format,
            http_request_body_limit_bytes,
            http_concurrency_limit,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr + Default + PartialEq + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    parse_positive(key, &raw)
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr + Default + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{Environment, parse_cors_origins, parse_positive};

    #[test]
    fn environment_parses_known_names() {
        assert_eq!(
            "production".parse::<Environment>().expect("valid"),
            Environment::Production
        );
        assert_eq!(
            " Dev ".parse::<Environment>().expect("valid"),
            Environment::Development
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn cors_origins_are_trimmed_and_skip_blanks() {
        assert_eq!(
            parse_cors_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn positive_values_reject_zero_and_garbage() {
        assert_eq!(parse_positive::<u16>("PORT", "8080").expect("valid"), 8080);
        assert!(parse_positive::<u16>("PORT", "0").is_err());
        assert!(parse_positive::<u16>("PORT", "70000").is_err());
        assert!(parse_positive::<usize>("LIMIT", "abc").is_err());
    }
}
