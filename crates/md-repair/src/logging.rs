use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the filter used when `RUST_LOG` is unset.
///
/// Accepts a bare level (`"debug"`) or full directives (`"warn,md_repair=trace"`).
pub fn default_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Install a global tracing subscriber for repair diagnostics.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (usually
/// `RepairConfig::logging.level`) is used as the filter. Fails if a
/// subscriber is already installed or the filter does not parse.
pub fn init(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| default_filter(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter("debug").is_ok());
        assert!(default_filter("warn,md_repair=trace").is_ok());
        assert!(default_filter("md_repair=loud").is_err());
    }

    #[test]
    fn test_init_rejects_bad_default_level() {
        // RUST_LOG takes precedence, so the default is only consulted without it.
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(init("md_repair=loud").is_err());
        }
    }
}
