use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

use crate::validation::observer::VERDICT_TARGET;

#[derive(Debug)]
pub enum TelemetryError {
    LogFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::LogFilter { value, .. } => {
                write!(f, "log filter '{value}' is not a valid tracing directive")
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "could not install the payment match log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::LogFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Filter from `APP_LOG_LEVEL`. With verdict logging on, approvals stay visible
/// even when the base level is stricter than `info`.
pub fn configured_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|source| invalid_filter(&config.log_level, source))?;
    if !config.log_verdicts {
        return Ok(filter);
    }

    let verdicts = format!("{VERDICT_TARGET}=info");
    let directive: Directive = verdicts
        .parse()
        .map_err(|source| invalid_filter(&verdicts, source))?;
    Ok(filter.add_directive(directive))
}

fn invalid_filter(value: &str, source: ParseError) -> TelemetryError {
    TelemetryError::LogFilter {
        value: value.to_string(),
        source,
    }
}
