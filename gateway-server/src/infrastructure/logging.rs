use std::str::FromStr;

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Line format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(anyhow!(
                "unknown log format '{other}', expecting compact or json"
            )),
        }
    }
}

/// `RUST_LOG` wins over `default_level`; an unparseable level falls back to `info`.
fn level_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber on stderr. The edge binary owns stdout.
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let builder = fmt()
        .with_env_filter(level_filter(default_level))
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Compact => builder.with_target(true).compact().try_init(),
        LogFormat::Json => builder
            .json()
            .with_target(false)
            .with_current_span(true)
            .try_init(),
    };

    installed.map_err(|e| anyhow!("failed to init logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::LogFormat;

    #[test]
    fn log_format_accepts_known_names() {
        assert_eq!("JSON".parse::<LogFormat>().expect("valid"), LogFormat::Json);
        assert_eq!(" text ".parse::<LogFormat>().expect("valid"), LogFormat::Compact);
        assert!("pretty".parse::<LogFormat>().is_err());
    }
}
